use anyhow::Result;
use integration_tests::{assert_matches_fixture, load_response};
use xrpl_normalizer::Normalizer;
use xrpl_normalizer::ledger::sort_by_quality;

#[test]
fn test_book_offers_match_fixture() -> Result<()> {
    let response = load_response("offers/book_offers.json")?;
    let offers = Normalizer::default().book_offers(&response)?;
    assert_matches_fixture(&offers, "offers/book_offers.expected.json")
}

#[test]
fn test_book_offers_sort_by_quality() -> Result<()> {
    let response = load_response("offers/book_offers.json")?;
    let mut offers = Normalizer::default().book_offers(&response)?;

    sort_by_quality(&mut offers, true);
    assert_eq!(offers[0].sequence, 2051);
    assert_eq!(offers[1].sequence, 113);

    sort_by_quality(&mut offers, false);
    assert_eq!(offers[0].sequence, 113);
    Ok(())
}

#[test]
fn test_account_offers_match_fixture() -> Result<()> {
    let response = load_response("offers/account_offers.json")?;
    let offers = Normalizer::default().account_offers(&response)?;
    assert_matches_fixture(&offers, "offers/account_offers.expected.json")
}

#[test]
fn test_liquidity_offers_are_passive_only() -> Result<()> {
    let response = load_response("offers/account_offers.json")?;
    let offers = Normalizer::default().liquidity_offers(&response)?;

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].sequence, 2051);
    assert!(offers[0].is_passive());
    Ok(())
}
