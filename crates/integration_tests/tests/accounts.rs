use anyhow::Result;
use integration_tests::{assert_matches_fixture, load_response};
use xrpl_normalizer::Normalizer;
use xrpl_normalizer::config::{LedgerConfig, Network, NetworkReserves};
use xrpl_normalizer::flags::ACCOUNT_ROOT_FLAGS;

#[test]
fn test_account_info_matches_fixture() -> Result<()> {
    let response = load_response("accounts/account_info.json")?;
    let account = Normalizer::default().account_info(&response)?;
    assert_matches_fixture(&account, "accounts/account_info.expected.json")
}

#[test]
fn test_token_issuer_matches_fixture() -> Result<()> {
    let response = load_response("accounts/account_info.json")?;
    let issuer = Normalizer::default().token_issuer(&response)?;
    assert_matches_fixture(&issuer, "accounts/token_issuer.expected.json")
}

#[test]
fn test_amm_account_is_detected() -> Result<()> {
    let response = load_response("accounts/amm_account_info.json")?;
    let account = Normalizer::default().account_info(&response)?;

    assert!(account.is_amm);
    // lsfAMM has no entry in the account flag table.
    let codes: Vec<_> = account.flags.iter().map(|flag| flag.code).collect();
    assert_eq!(
        codes,
        vec!["lsfDefaultRipple", "lsfDepositAuth", "lsfDisableMaster"]
    );
    assert!(ACCOUNT_ROOT_FLAGS.iter().all(|flag| flag.value != 0x0200_0000));
    Ok(())
}

#[test]
fn test_spendable_balance_follows_configured_reserves() -> Result<()> {
    let response = load_response("accounts/account_info.json")?;

    let mut reserves = *NetworkReserves::load()?.get_or_error(Network::Testnet)?;
    reserves.base_drops = 10_000_000;
    reserves.increment_drops = 2_000_000;
    let config = LedgerConfig {
        network: Network::Testnet,
        reserves,
        ..Default::default()
    };
    let account = Normalizer::new(&config)?.account_info(&response)?;

    // 1520 - 10 - 12 * 2
    assert_eq!(account.spendable_balance, "1486");
    assert_eq!(account.balance, "1520");
    Ok(())
}
