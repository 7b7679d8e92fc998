mod common;

use chrono::NaiveDate;
use expense_tracker::{
    domain::{BudgetConfig, ExpenseCategory},
    services::ValidationError,
    storage::{MemoryStore, EXPENSES_KEY, SALARY_KEY},
    ExpenseSession, SubmitOutcome,
};
use uuid::Uuid;

use common::{fixed_clock, memory_session, BrokenStore};

#[test]
fn budget_warning_scenario() {
    let mut session = memory_session();
    assert_eq!(session.available_balance(), 8000.0);

    let outcome = session.submit_expense("Rent", "500", "Housing");
    let SubmitOutcome::Committed(rent) = outcome else {
        panic!("expected commit");
    };
    assert_eq!(rent.date, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
    assert_eq!(session.total_expenses(), 500.0);
    assert_eq!(session.available_balance(), 7500.0);

    let outcome = session.submit_expense("New bike", "9000", "Transportation");
    let SubmitOutcome::NeedsConfirmation(candidate) = outcome else {
        panic!("expected a confirmation request");
    };
    assert!(candidate.exceeds_balance());
    assert_eq!(
        session.alert_message(&candidate),
        "Warning: This expense of $9000.00 exceeds your available balance of $7500.00!"
    );
    // Declining the warning simply drops the candidate.
    assert_eq!(session.expenses().len(), 1);
    assert_eq!(session.total_expenses(), 500.0);
}

#[test]
fn confirming_a_warning_records_the_expense() {
    let mut session = memory_session();
    let SubmitOutcome::NeedsConfirmation(candidate) =
        session.submit_expense("Vacation", "8000.01", "Entertainment")
    else {
        panic!("expected a confirmation request");
    };

    let expense = session.confirm_expense(candidate);
    assert_eq!(expense.category, ExpenseCategory::Entertainment);
    assert_eq!(session.expenses().len(), 1);
    assert!(session.summary().overdrawn);
}

#[test]
fn rejected_submissions_leave_state_untouched() {
    let mut session = memory_session();
    assert_eq!(
        session.submit_expense("", "10", "Other"),
        SubmitOutcome::Rejected(ValidationError::EmptyDescription)
    );
    assert_eq!(
        session.submit_expense("Snacks", "-3", "Other"),
        SubmitOutcome::Rejected(ValidationError::InvalidAmount)
    );
    assert_eq!(
        session.submit_expense("Snacks", "3", ""),
        SubmitOutcome::Rejected(ValidationError::MissingCategory)
    );
    assert!(session.expenses().is_empty());
    assert!(session.store().raw(EXPENSES_KEY).is_none());
}

#[test]
fn each_commit_grows_collection_and_total_by_amount() {
    let mut session = memory_session();
    for (idx, amount) in ["12.5", "40", "7.25"].iter().enumerate() {
        let before_total = session.total_expenses();
        let outcome = session.submit_expense("Item", amount, "Shopping");
        assert!(outcome.is_committed());
        assert_eq!(session.expenses().len(), idx + 1);
        let parsed: f64 = amount.parse().unwrap();
        assert_eq!(session.total_expenses(), before_total + parsed);
    }
}

#[test]
fn delete_by_id_and_unknown_id() {
    let mut session = memory_session();
    let SubmitOutcome::Committed(first) = session.submit_expense("Gym", "30", "Healthcare") else {
        panic!("expected commit");
    };
    session.submit_expense("Course", "120", "Education");

    assert!(!session.delete_expense(Uuid::new_v4()));
    assert_eq!(session.expenses().len(), 2);

    assert!(session.delete_expense(first.id));
    assert_eq!(session.expenses().len(), 1);
    assert_eq!(session.total_expenses(), 120.0);
    assert!(!session.delete_expense(first.id));
}

#[test]
fn budget_update_is_atomic() {
    let mut session = memory_session();
    assert_eq!(
        session.update_budget("3000", "3500"),
        Err(ValidationError::SavingsExceedSalary)
    );
    assert_eq!(session.budget(), &BudgetConfig::default());
    assert!(session.store().raw(SALARY_KEY).is_none());

    let budget = session.update_budget("3000", "500").expect("valid budget");
    assert_eq!(budget, BudgetConfig::new(3000.0, 500.0));
    assert_eq!(session.available_balance(), 2500.0);
    assert_eq!(session.store().raw(SALARY_KEY), Some("3000"));
}

#[test]
fn balance_identity_after_every_operation() {
    let mut session = memory_session();
    let check = |session: &ExpenseSession<MemoryStore>| {
        let budget = session.budget();
        assert_eq!(
            session.available_balance(),
            budget.salary - budget.savings - session.total_expenses()
        );
    };

    check(&session);
    session.submit_expense("Dinner", "64.5", "Food & Dining");
    check(&session);
    session.update_budget("5200", "800").unwrap();
    check(&session);
    let id = session.expenses()[0].id;
    session.delete_expense(id);
    check(&session);
    session.select_currency("JPY");
    check(&session);
}

#[test]
fn currency_selection_changes_display_only() {
    let mut session = memory_session();
    session.submit_expense("Train", "25", "Transportation");

    let yen = session.select_currency("JPY").expect("known code");
    assert_eq!(yen.symbol, "¥");
    assert_eq!(session.currency().code, "JPY");
    assert_eq!(session.total_expenses(), 25.0);

    assert!(session.select_currency("XYZ").is_none());
    assert_eq!(session.currency().code, "JPY");
}

#[test]
fn write_failures_never_roll_back_memory() {
    let mut session = ExpenseSession::open_with_clock(BrokenStore::default(), fixed_clock());

    assert!(session.submit_expense("Lunch", "15", "Food & Dining").is_committed());
    assert_eq!(session.expenses().len(), 1);
    assert!(session.update_budget("4000", "1000").is_ok());
    assert_eq!(session.budget().salary, 4000.0);
    assert!(session.select_currency("EUR").is_some());
    assert_eq!(session.currency().code, "EUR");
}
