mod common;

use common::{day, gpu, price, setup};
use gpuprices::domain::entities::price::NewPrice;
use gpuprices::domain::error::DomainError;
use gpuprices::domain::ports::Page;

#[test]
fn test_price_round_trip() {
    let svc = setup();
    let p = gpu(&svc, "3060");
    let input = NewPrice::new(412.5, day(7), "Newegg", "GIGABYTE");

    let created = svc.add_price(p.id, input.clone()).unwrap();
    let read = svc.get_prices_by_id(p.id).unwrap();

    assert_eq!(read.len(), 1);
    assert_eq!(read[0], created);
    assert_eq!(read[0].price, input.price);
    assert_eq!(read[0].date, input.date);
    assert_eq!(read[0].retailer, input.retailer);
    assert_eq!(read[0].manufacturer, input.manufacturer);
}

#[test]
fn test_add_price_for_missing_product() {
    let svc = setup();
    let err = svc.add_price(7, price(100.0, 1)).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(svc.list_prices(&Page::default()).unwrap().is_empty());
}

#[test]
fn test_negative_price_rejected() {
    let svc = setup();
    let p = gpu(&svc, "3060");
    let err = svc.add_price(p.id, price(-1.0, 1)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_prices_by_id_descending() {
    let svc = setup();
    let p = gpu(&svc, "3060");
    for (amount, d) in [(400.0, 1), (560.0, 2), (299.0, 3)] {
        svc.add_price(p.id, price(amount, d)).unwrap();
    }

    let amounts: Vec<f64> = svc
        .get_prices_by_id(p.id)
        .unwrap()
        .iter()
        .map(|p| p.price)
        .collect();
    assert_eq!(amounts, vec![560.0, 400.0, 299.0]);
}

#[test]
fn test_prices_by_name() {
    let svc = setup();
    let p = gpu(&svc, "3070");
    svc.add_price(p.id, price(600.0, 4)).unwrap();

    assert_eq!(svc.get_prices_by_name("GeForce RTX 3070").unwrap().len(), 1);
    assert!(matches!(
        svc.get_prices_by_name("GeForce RTX 9999"),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_lowest_price_example() {
    let svc = setup();
    let p = gpu(&svc, "3060");
    let mut ids = Vec::new();
    for (amount, d) in [(400.0, 1), (560.0, 2), (299.0, 3)] {
        ids.push(svc.add_price(p.id, price(amount, d)).unwrap().id);
    }

    let lowest = svc.get_lowest_price(p.id).unwrap().unwrap();
    assert_eq!(lowest.price, 299.0);

    assert_eq!(svc.delete_price(lowest.id).unwrap(), 1);
    let lowest = svc.get_lowest_price(p.id).unwrap().unwrap();
    assert_eq!(lowest.price, 400.0);
    assert_eq!(lowest.id, ids[0]);
}

#[test]
fn test_lowest_price_ignores_zero() {
    let svc = setup();
    let p = gpu(&svc, "3050");
    svc.add_price(p.id, price(0.0, 1)).unwrap();
    svc.add_price(p.id, price(310.0, 2)).unwrap();

    let lowest = svc.get_lowest_price(p.id).unwrap().unwrap();
    assert!(lowest.price > 0.0);
    assert_eq!(lowest.price, 310.0);
}

#[test]
fn test_lowest_price_none_when_only_sentinels() {
    let svc = setup();
    let p = gpu(&svc, "3050");
    svc.add_price(p.id, price(0.0, 1)).unwrap();
    assert!(svc.get_lowest_price(p.id).unwrap().is_none());
}

#[test]
fn test_lowest_price_missing_product() {
    let svc = setup();
    assert!(matches!(
        svc.get_lowest_price(3),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_delete_missing_price_returns_zero() {
    let svc = setup();
    assert_eq!(svc.delete_price(123).unwrap(), 0);
}

#[test]
fn test_list_prices_pagination() {
    let svc = setup();
    let p = gpu(&svc, "3060");
    for d in 1..=5 {
        svc.add_price(p.id, price(100.0 * d as f64, d)).unwrap();
    }
    let page = svc.list_prices(&Page::new(3, 10)).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].price, 400.0);
}
