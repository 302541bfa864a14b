mod config;

use bank::{statement, Account, BankingSystem, Customer, Result};

use std::sync::Arc;

use anyhow::Context;
use rust_decimal_macros::dec;

fn main() -> Result {
    config::configure_logging()?;

    log::debug!("Logging configured. Starting demonstration...");

    let bank = BankingSystem::new();

    println!("=== Banking System Demonstration ===\n");

    let (john, jane) = register_customers(&bank)?;
    let accounts = open_accounts(&john, &jane)?;

    run_deposits(&accounts.john_savings)?;
    run_withdrawals(&accounts.john_checking, &accounts.jane_savings)?;
    run_transfers(&accounts.john_savings, &accounts.jane_checking)?;
    run_interest(&accounts.john_savings, &accounts.john_checking);
    run_overdraft_walkthrough(&accounts.jane_checking)?;
    run_savings_advisories(&accounts.john_savings)?;

    print_account_details(&accounts);
    print_history(&accounts.john_savings);
    print_statement(&accounts.john_savings)?;
    print_summaries(&bank, &john);

    log::debug!("Demonstration finished successfully!");

    Ok(())
}

struct DemoAccounts {
    john_savings: Arc<Account>,
    john_checking: Arc<Account>,
    jane_savings: Arc<Account>,
    jane_checking: Arc<Account>,
}

fn register_customers(bank: &BankingSystem) -> Result<(Arc<Customer>, Arc<Customer>)> {
    println!(">>> Registering Customers <<<\n");

    let john = bank.register_customer("John Doe", "john@example.com", "123-456-7890")?;
    println!("Registered: {}", john.name());

    let jane = bank.register_customer("Jane Smith", "jane@example.com", "098-765-4321")?;
    println!("Registered: {}", jane.name());

    return Ok((john, jane));
}

fn open_accounts(john: &Customer, jane: &Customer) -> Result<DemoAccounts> {
    println!("\n>>> Creating Accounts <<<\n");

    let john_savings = Arc::new(Account::savings("John Doe", dec!(5000))?);
    john.add_account(Arc::clone(&john_savings))?;
    println!("Created savings account for John: $5000.00");

    let john_checking = Arc::new(Account::checking("John Doe", dec!(2000))?);
    john.add_account(Arc::clone(&john_checking))?;
    println!("Created checking account for John: $2000.00");

    let jane_savings = Arc::new(Account::Savings(bank::SavingsAccount::with_interest_rate(
        "Jane Smith",
        dec!(8000),
        dec!(0.05),
    )?));
    jane.add_account(Arc::clone(&jane_savings))?;
    println!("Created savings account for Jane: $8000.00 (5% interest)");

    let jane_checking = Arc::new(Account::checking("Jane Smith", dec!(3000))?);
    jane.add_account(Arc::clone(&jane_checking))?;
    println!("Created checking account for Jane: $3000.00");

    return Ok(DemoAccounts {
        john_savings,
        john_checking,
        jane_savings,
        jane_checking,
    });
}

fn run_deposits(savings: &Account) -> Result {
    println!("\n>>> Deposit Operations <<<\n");

    savings.deposit(dec!(1500))?;
    println!("John deposited $1500.00 to his savings account");
    println!("  New balance: ${:.2}", savings.balance());

    // Invalid amounts are rejected before anything changes.
    if let Err(e) = savings.deposit(dec!(-500)) {
        println!("Rejected deposit of $-500.00: {e}");
    }

    return Ok(());
}

fn run_withdrawals(checking: &Account, savings: &Account) -> Result {
    println!("\n>>> Withdraw Operations <<<\n");

    checking.withdraw(dec!(500))?;
    println!("John withdrew $500.00 from his checking account");
    println!("  New balance: ${:.2}", checking.balance());

    match savings.withdraw(dec!(10000)) {
        Ok(()) => println!("Withdrawal successful"),
        Err(e) => println!("Rejected withdrawal of $10000.00: {e}"),
    }

    return Ok(());
}

fn run_transfers(source: &Account, destination: &Account) -> Result {
    println!("\n>>> Transfer Operations <<<\n");

    source.transfer(destination, dec!(2000))?;
    println!("John transferred $2000.00 from his savings to Jane's checking account");
    println!("  John's savings balance: ${:.2}", source.balance());
    println!("  Jane's checking balance: ${:.2}", destination.balance());

    return Ok(());
}

fn run_interest(savings: &Account, checking: &Account) {
    println!("\n>>> Apply Monthly Interest <<<\n");

    savings.apply_interest();
    println!("Applied interest to John's savings account");
    println!("  New balance: ${:.2}", savings.balance());

    checking.apply_interest();
    println!("Applied interest to John's checking account");
    println!("  New balance: ${:.2}", checking.balance());
}

fn run_overdraft_walkthrough(account: &Account) -> Result {
    println!("\n>>> Overdraft Walkthrough (Jane's Checking) <<<\n");

    let checking = account
        .as_checking()
        .context("expected a checking account")?;

    account.withdraw(dec!(5200))?;
    println!("Jane withdrew $5200.00, dipping into her overdraft");
    println!("  Balance: ${:.2}", account.balance());
    println!("  Available balance: ${:.2}", checking.available_balance());

    checking.update_overdraft();
    println!("  Overdraft used: ${:.2}", checking.overdraft_used());
    println!("  Remaining overdraft: ${:.2}", checking.remaining_overdraft());

    return Ok(());
}

fn run_savings_advisories(account: &Account) -> Result {
    println!("\n>>> Savings Advisory Limits (John's Savings) <<<\n");

    let savings = account.as_savings().context("expected a savings account")?;

    savings.increment_withdrawal_count();
    println!(
        "Monthly withdrawals so far: {}/{}",
        savings.withdrawal_count(),
        savings.max_monthly_withdrawals()
    );
    println!(
        "Maintaining minimum balance: {}",
        savings.is_maintaining_minimum_balance()
    );

    return Ok(());
}

fn print_account_details(accounts: &DemoAccounts) {
    println!("\n>>> Account Details <<<\n");

    println!("{}\n", accounts.john_savings.details());
    println!("{}\n", accounts.john_checking.details());
    println!("{}\n", accounts.jane_savings.details());
    println!("{}", accounts.jane_checking.details());
}

fn print_history(account: &Account) {
    println!("\n>>> Transaction History (John's Savings) <<<\n");

    let history = account.transaction_history();

    if history.is_empty() {
        println!("No transactions.");
        return;
    }

    for record in history.iter() {
        println!("{}", record.details());
    }
}

fn print_statement(account: &Account) -> Result {
    println!("\n>>> CSV Statement (John's Savings) <<<\n");

    let statement = statement::render_statement(account)?;
    println!("{statement}");

    return Ok(());
}

fn print_summaries(bank: &BankingSystem, john: &Customer) {
    println!("\n>>> Customer Summaries <<<\n");

    for customer in bank.all_customers() {
        println!("{}\n", customer.summary());
    }

    println!(">>> Accounts by Type (John) <<<\n");
    println!(
        "Savings accounts: {}",
        john.accounts_by_type("SAVINGS").len()
    );
    println!(
        "Checking accounts: {}",
        john.accounts_by_type("CHECKING").len()
    );
}
