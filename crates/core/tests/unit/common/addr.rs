//! Address Type Tests.
//!
//! Verifies bank identity, row matching, and the rank-major ordering the
//! idle-row reaper relies on.

use dramsched_core::common::{BankId, DramAddr};

use crate::common::builder::request::RequestBuilder;

#[test]
fn bank_id_from_addr() {
    let addr = DramAddr::new(1, 2, 5, 0x40, 0x8);
    assert_eq!(addr.bank_id(), BankId::new(2, 5));
}

#[test]
fn targets_row_requires_bank_and_row() {
    let addr = DramAddr::new(0, 1, 3, 0x99, 0);
    assert!(addr.targets_row(BankId::new(1, 3), 0x99));
    assert!(!addr.targets_row(BankId::new(1, 3), 0x98), "different row");
    assert!(!addr.targets_row(BankId::new(1, 2), 0x99), "different bank");
    assert!(!addr.targets_row(BankId::new(0, 3), 0x99), "different rank");
}

#[test]
fn targets_row_ignores_column() {
    let a = DramAddr::new(0, 0, 0, 7, 0x10);
    let b = DramAddr::new(0, 0, 0, 7, 0x3F0);
    assert!(a.targets_row(b.bank_id(), b.row));
}

#[test]
fn bank_ordering_is_rank_major() {
    let mut banks = vec![
        BankId::new(1, 0),
        BankId::new(0, 7),
        BankId::new(1, 3),
        BankId::new(0, 0),
    ];
    banks.sort();
    assert_eq!(
        banks,
        vec![
            BankId::new(0, 0),
            BankId::new(0, 7),
            BankId::new(1, 0),
            BankId::new(1, 3),
        ]
    );
}

#[test]
fn display_formats() {
    assert_eq!(BankId::new(1, 6).to_string(), "r1b6");
    assert_eq!(
        DramAddr::new(0, 1, 2, 0x1f, 0x40).to_string(),
        "ch0:r1b2:row0x1f:col0x40"
    );
}

#[test]
fn request_row_match_ignores_column() {
    let req = RequestBuilder::new(1).at(1, 3, 0x99).column(0x3F8).build();
    assert_eq!(req.addr.column, 0x3F8);
    assert!(req.targets_row(BankId::new(1, 3), 0x99));
}
