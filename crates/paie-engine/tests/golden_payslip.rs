//! Golden reconciliation scenario, taken from production fixture data.
//!
//! Pay elements: base 4929.28, seniority 250.00, result bonus 500.00,
//! meal vouchers 115.50 — all additions. Contribution lines sum to
//! 1204.32 employee-side and 2549.70 employer-side. With 168.05 of
//! withholding passed through, the reconciled figures must come out to
//! the cent.

use chrono::NaiveDate;
use paie_engine::{
    compute_payslip, BulletinStatus, ComputationInput, ContributionCategory, ContributionRule,
    EmployeeSnapshot, EmployerSnapshot, PaidLeave, PayElement, RuleSets,
};
use paie_core::{EmployeeId, Money, Nir, PayPeriod, Rate, Siret};
use rust_decimal_macros::dec;

fn fixture_input() -> ComputationInput {
    ComputationInput {
        employee: EmployeeSnapshot {
            employee_id: EmployeeId::new(),
            full_name: "Claire Fontaine".to_owned(),
            address: "12 rue de la Paix, 75002 Paris".to_owned(),
            nir: Nir::parse("1850578006048").unwrap(),
            job_title: Some("Directrice technique".to_owned()),
        },
        employer: EmployerSnapshot {
            name: "Exemple SAS".to_owned(),
            address: "4 avenue Gambetta, 69003 Lyon".to_owned(),
            siret: Siret::parse("73282932000074").unwrap(),
            ape_code: Some("6201Z".to_owned()),
        },
        period: PayPeriod::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        )
        .unwrap(),
        payment_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        elements: vec![
            PayElement::addition("Salaire de base", Money(dec!(4929.28))).unwrap(),
            PayElement::addition("Prime d'ancienneté", Money(dec!(250.00))).unwrap(),
            PayElement::addition("Prime de résultat", Money(dec!(500.00))).unwrap(),
            PayElement::addition("Titres-restaurant (part patronale)", Money(dec!(115.50)))
                .unwrap(),
        ],
        tax_withheld: Money(dec!(168.05)),
        paid_leave: PaidLeave {
            acquired: dec!(2.5),
            taken: dec!(0),
            balance: dec!(12.5),
        },
    }
}

fn fixture_rules() -> RuleSets {
    let rule = |category, label: &str, base, employee, employer| ContributionRule {
        category,
        label: label.to_owned(),
        base_amount: Money(base),
        employee_rate: Rate(employee),
        employer_rate: Rate(employer),
    };
    RuleSets::fiscal_only(vec![
        rule(
            ContributionCategory::Sante,
            "Maladie, maternité, invalidité",
            dec!(5794.78),
            dec!(0),
            dec!(0.13),
        ),
        rule(
            ContributionCategory::Retraite,
            "Retraite de base",
            dec!(5794.78),
            dec!(0.069),
            dec!(0.0855),
        ),
        rule(
            ContributionCategory::Retraite,
            "Retraite complémentaire",
            dec!(8663.20),
            dec!(0),
            dec!(0.10),
        ),
        rule(
            ContributionCategory::Famille,
            "Allocations familiales",
            dec!(5794.78),
            dec!(0),
            dec!(0.0345),
        ),
        rule(
            ContributionCategory::Chomage,
            "Assurance chômage",
            dec!(5794.78),
            dec!(0),
            dec!(0.0405),
        ),
        rule(
            ContributionCategory::CsgCrds,
            "CSG déductible et CRDS",
            dec!(5693.37),
            dec!(0.098),
            dec!(0),
        ),
        rule(
            ContributionCategory::Autres,
            "Prévoyance",
            dec!(2465.30),
            dec!(0.10),
            dec!(0),
        ),
    ])
}

#[test]
fn golden_reconciliation_to_the_cent() {
    let payslip = compute_payslip(fixture_input(), &fixture_rules()).unwrap();

    assert_eq!(payslip.gross_salary, Money(dec!(5794.78)));
    assert_eq!(payslip.net_before_tax, Money(dec!(4590.46)));
    assert_eq!(payslip.net_to_pay, Money(dec!(4422.41)));
    assert_eq!(payslip.employer_cost, Money(dec!(8344.48)));
    // No distinct social rule set supplied.
    assert_eq!(payslip.net_social, Money(dec!(4590.46)));
    assert_eq!(payslip.status, BulletinStatus::Draft);
}

#[test]
fn golden_contribution_totals() {
    let payslip = compute_payslip(fixture_input(), &fixture_rules()).unwrap();

    let employee: Money = payslip.contributions.iter().map(|c| c.employee_amount).sum();
    let employer: Money = payslip.contributions.iter().map(|c| c.employer_amount).sum();
    assert_eq!(employee, Money(dec!(1204.32)));
    assert_eq!(employer, Money(dec!(2549.70)));
    // Lines come out in rule order, one per rule, zero-rate lines included.
    assert_eq!(payslip.contributions.len(), 7);
    assert_eq!(payslip.contributions[0].label, "Maladie, maternité, invalidité");
    assert_eq!(payslip.contributions[0].employee_amount, Money(dec!(0.00)));
}

#[test]
fn golden_invariants_hold() {
    let payslip = compute_payslip(fixture_input(), &fixture_rules()).unwrap();

    let gross: Money = payslip
        .pay_elements
        .iter()
        .filter(|e| e.kind.is_addition())
        .map(|e| e.amount)
        .sum();
    assert_eq!(payslip.gross_salary, gross);

    let employee: Money = payslip.contributions.iter().map(|c| c.employee_amount).sum();
    assert_eq!(payslip.net_before_tax, payslip.gross_salary - employee);

    let employer: Money = payslip.contributions.iter().map(|c| c.employer_amount).sum();
    assert_eq!(payslip.employer_cost, payslip.gross_salary + employer);
}

#[test]
fn golden_record_round_trips_through_json() {
    let payslip = compute_payslip(fixture_input(), &fixture_rules()).unwrap();
    let json = serde_json::to_string(&payslip).unwrap();
    let back: paie_engine::Payslip = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payslip);

    // Interchange field names are a contract with collaborators.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("grossSalary").is_some());
    assert!(value.get("netBeforeTax").is_some());
    assert!(value.get("netToPay").is_some());
    assert!(value.get("netSocial").is_some());
    assert!(value.get("employerCost").is_some());
    assert!(value.get("paidLeaveBalance").is_some());
    assert!(value.get("periodStart").is_some());
    assert!(value["payElements"][0].get("isAddition").is_some());
}
