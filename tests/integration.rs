use bank::{statement, Account, AccountError, BankingSystem, CustomerError, TransactionKind};

use std::sync::Arc;
use std::thread;

use rust_decimal_macros::dec;

#[test]
fn full_customer_lifecycle() {
    let bank = BankingSystem::new();

    let john = bank
        .register_customer("John Doe", "john@example.com", "123-456-7890")
        .unwrap();
    let jane = bank
        .register_customer("Jane Smith", "jane@example.com", "098-765-4321")
        .unwrap();

    let john_savings = Arc::new(Account::savings("John Doe", dec!(5000)).unwrap());
    let john_checking = Arc::new(Account::checking("John Doe", dec!(2000)).unwrap());
    let jane_checking = Arc::new(Account::checking("Jane Smith", dec!(3000)).unwrap());

    let savings_id = john.add_account(Arc::clone(&john_savings)).unwrap();
    john.add_account(Arc::clone(&john_checking)).unwrap();
    jane.add_account(Arc::clone(&jane_checking)).unwrap();

    // Deposit, withdraw, and transfer through the public surface.
    john_savings.deposit(dec!(1500)).unwrap();
    john_checking.withdraw(dec!(500)).unwrap();
    john_savings.transfer(&jane_checking, dec!(2000)).unwrap();

    assert_eq!(john_savings.balance(), dec!(4500));
    assert_eq!(john_checking.balance(), dec!(1500));
    assert_eq!(jane_checking.balance(), dec!(5000));

    assert_eq!(john.total_balance(), dec!(6000));
    assert_eq!(jane.total_balance(), dec!(5000));

    // The savings history explains the balance: opening, deposit, transfer.
    let history = john_savings.transaction_history();
    let kinds: Vec<TransactionKind> = history.iter().map(|record| record.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TransactionKind::InitialDeposit,
            TransactionKind::Deposit,
            TransactionKind::TransferOut,
        ]
    );

    // Lookup by id still resolves after the mutations.
    let found = john.account(&savings_id).unwrap();
    assert_eq!(found.balance(), dec!(4500));

    // Summary and statement render the same state.
    assert!(john.summary().contains("Number of Accounts: 2"));
    assert!(john.summary().contains("Total Balance: $6000.00"));

    let statement = statement::render_statement(&john_savings).unwrap();
    assert_eq!(statement.trim_end().lines().count(), 4);
    assert!(statement.contains("TRANSFER_OUT"));
    assert!(statement.contains("Transfer to Jane Smith"));
}

#[test]
fn failed_operations_leave_no_trace() {
    let account = Account::savings("John Doe", dec!(100)).unwrap();
    let history_before = account.transaction_history();

    assert!(matches!(
        account.deposit(dec!(0)),
        Err(AccountError::InvalidAmount(_))
    ));
    assert!(matches!(
        account.deposit(dec!(1000001)),
        Err(AccountError::InvalidAmount(_))
    ));
    assert!(matches!(
        account.withdraw(dec!(250)),
        Err(AccountError::InsufficientFunds { .. })
    ));

    assert_eq!(account.balance(), dec!(100));
    assert_eq!(account.transaction_history(), history_before);
}

#[test]
fn account_cap_and_lookup_errors_surface_as_customer_errors() {
    let bank = BankingSystem::new();
    let customer = bank
        .register_customer("John Doe", "john@example.com", "123-456-7890")
        .unwrap();

    for _ in 0..10 {
        let account = Arc::new(Account::checking("John Doe", dec!(1)).unwrap());
        customer.add_account(account).unwrap();
    }

    let eleventh = Arc::new(Account::checking("John Doe", dec!(1)).unwrap());
    assert_eq!(
        customer.add_account(eleventh),
        Err(CustomerError::AccountLimitExceeded)
    );
    assert_eq!(customer.account_count(), 10);
}

#[test]
fn overdraft_cycle_across_the_public_surface() {
    let account = Account::checking("Jane Smith", dec!(1000)).unwrap();

    account.withdraw(dec!(1200)).unwrap();
    assert_eq!(account.balance(), dec!(-200));

    let checking = account.as_checking().unwrap();
    assert_eq!(checking.available_balance(), dec!(300));

    checking.update_overdraft();
    assert_eq!(checking.overdraft_used(), dec!(200));
    assert_eq!(checking.remaining_overdraft(), dec!(300));

    // Interest never fails, even in overdraft: 1% monthly slice plus the
    // 5% fee on the 200 in use.
    account.apply_interest();
    let expected = dec!(-200) + dec!(-200) * dec!(0.01) / dec!(12) - dec!(200) * dec!(0.05);
    assert_eq!(account.balance(), expected);
}

#[test]
fn concurrent_mixed_traffic_conserves_money() {
    let a = Arc::new(Account::savings("John Doe", dec!(100000)).unwrap());
    let b = Arc::new(Account::savings("Jane Smith", dec!(100000)).unwrap());

    let mut handles = Vec::new();

    for _ in 0..4 {
        let source = Arc::clone(&a);
        let destination = Arc::clone(&b);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                source.transfer(&destination, dec!(5)).unwrap();
            }
        }));

        let source = Arc::clone(&b);
        let destination = Arc::clone(&a);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                source.transfer(&destination, dec!(5)).unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(a.balance() + b.balance(), dec!(200000));
    assert_eq!(a.balance(), dec!(100000));
    assert_eq!(b.balance(), dec!(100000));

    // Every transfer left a record on each side: 400 transfers overall,
    // plus each account's opening record.
    assert_eq!(a.transaction_history().len(), 1 + 400);
    assert_eq!(b.transaction_history().len(), 1 + 400);
}
