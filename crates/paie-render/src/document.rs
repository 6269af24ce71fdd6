//! # Document Builders — From Records to Section Models
//!
//! Builds [`DocumentModel`]s for the three downloadable documents: the
//! payslip, the employment contract, and the work certificate. Builders
//! emit sections in the fixed layout order and format every value through
//! [`crate::format`]; the resulting model contains strings only.

use chrono::NaiveDate;
use paie_engine::{AnnualTotals, ElementKind, Payslip};
use paie_engine::{EmployeeSnapshot, EmployerSnapshot};
use paie_core::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format;
use crate::model::{DocumentModel, Row, Section, SectionKind};

// ─── Companion Records ───────────────────────────────────────────────

/// The data behind an employment-contract document. Snapshot semantics
/// match the payslip: copies, not live references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    /// Employee identity snapshot.
    pub employee: EmployeeSnapshot,
    /// Employer identity snapshot.
    pub employer: EmployerSnapshot,
    /// Contract kind heading (e.g. "Contrat à durée indéterminée").
    pub contract_kind: String,
    /// First working day.
    pub start_date: NaiveDate,
    /// Agreed gross monthly salary.
    pub gross_monthly_salary: Money,
    /// Contractual weekly hours.
    pub weekly_hours: Decimal,
}

/// The data behind a work-certificate document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Employee identity snapshot.
    pub employee: EmployeeSnapshot,
    /// Employer identity snapshot.
    pub employer: EmployerSnapshot,
    /// Employment start date.
    pub start_date: NaiveDate,
    /// Employment end date.
    pub end_date: NaiveDate,
    /// Position held.
    pub job_title: String,
}

// ─── Builders ────────────────────────────────────────────────────────

/// Build the payslip document. `ytd` adds year-to-date figures to the
/// cumulative section when the caller has an annual aggregate at hand.
pub fn payslip_document(payslip: &Payslip, ytd: Option<&AnnualTotals>) -> DocumentModel {
    let mut sections = Vec::with_capacity(SectionKind::ALL.len());

    sections.push(employer_section(&payslip.employer));
    sections.push(employee_section(&payslip.employee));

    // Remuneration table.
    let mut rows = vec![Row::new(["Libellé", "Base", "Taux", "Montant"])];
    for element in &payslip.pay_elements {
        let amount = match element.kind {
            ElementKind::Addition => format::eur(element.amount),
            ElementKind::Deduction => format!("-{}", format::eur(element.amount)),
        };
        rows.push(Row::new([
            element.label.clone(),
            element.base.map(format::eur).unwrap_or_default(),
            element.rate.map(format::percent).unwrap_or_default(),
            amount,
        ]));
    }
    rows.push(Row::new([
        "Salaire brut".to_owned(),
        String::new(),
        String::new(),
        format::eur(payslip.gross_salary),
    ]));
    sections.push(Section {
        kind: SectionKind::Remuneration,
        rows,
    });

    // Contribution table.
    let mut rows = vec![Row::new([
        "Cotisation",
        "Base",
        "Taux salarial",
        "Part salariale",
        "Taux patronal",
        "Part patronale",
    ])];
    let mut total_employee = Money::ZERO;
    let mut total_employer = Money::ZERO;
    for line in &payslip.contributions {
        total_employee += line.employee_amount;
        total_employer += line.employer_amount;
        rows.push(Row::new([
            line.label.clone(),
            format::eur(line.base_amount),
            format::percent(line.employee_rate),
            format::eur(line.employee_amount),
            format::percent(line.employer_rate),
            format::eur(line.employer_amount),
        ]));
    }
    rows.push(Row::new([
        "Total des cotisations".to_owned(),
        String::new(),
        String::new(),
        format::eur(total_employee),
        String::new(),
        format::eur(total_employer),
    ]));
    sections.push(Section {
        kind: SectionKind::Contributions,
        rows,
    });

    sections.push(Section {
        kind: SectionKind::Leave,
        rows: vec![
            Row::new(["Acquis sur la période".to_owned(), format::days(payslip.paid_leave_acquired)]),
            Row::new(["Pris sur la période".to_owned(), format::days(payslip.paid_leave_taken)]),
            Row::new(["Solde".to_owned(), format::days(payslip.paid_leave_balance)]),
        ],
    });

    sections.push(Section {
        kind: SectionKind::Summary,
        rows: vec![
            Row::new(["Salaire brut".to_owned(), format::eur(payslip.gross_salary)]),
            Row::new(["Net à payer avant impôt".to_owned(), format::eur(payslip.net_before_tax)]),
            Row::new(["Impôt prélevé à la source".to_owned(), format::eur(payslip.tax_withheld)]),
            Row::new(["Net payé".to_owned(), format::eur(payslip.net_to_pay)]),
            Row::new(["Montant net social".to_owned(), format::eur(payslip.net_social)]),
        ],
    });

    let mut rows = vec![Row::new([
        "Coût total employeur".to_owned(),
        format::eur(payslip.employer_cost),
    ])];
    if let Some(ytd) = ytd {
        rows.push(Row::new(["Brut cumulé".to_owned(), format::eur(ytd.gross_salary)]));
        rows.push(Row::new(["Net payé cumulé".to_owned(), format::eur(ytd.net_to_pay)]));
        rows.push(Row::new([
            "Coût employeur cumulé".to_owned(),
            format::eur(ytd.employer_cost),
        ]));
    }
    sections.push(Section {
        kind: SectionKind::CumulativeTotals,
        rows,
    });

    sections.push(legal_section());

    DocumentModel {
        title: format!(
            "Bulletin de paie — {}",
            format::month_year(payslip.period_start)
        ),
        sections,
    }
}

/// Build the employment-contract document.
pub fn contract_document(contract: &ContractRecord) -> DocumentModel {
    DocumentModel {
        title: contract.contract_kind.clone(),
        sections: vec![
            employer_section(&contract.employer),
            employee_section(&contract.employee),
            Section {
                kind: SectionKind::Summary,
                rows: vec![
                    Row::new(["Date d'entrée".to_owned(), format::date(contract.start_date)]),
                    Row::new([
                        "Salaire mensuel brut".to_owned(),
                        format::eur(contract.gross_monthly_salary),
                    ]),
                    Row::new([
                        "Durée hebdomadaire".to_owned(),
                        format!("{} heures", format::days(contract.weekly_hours)),
                    ]),
                ],
            },
            legal_section(),
        ],
    }
}

/// Build the work-certificate document.
pub fn certificate_document(certificate: &CertificateRecord) -> DocumentModel {
    DocumentModel {
        title: "Certificat de travail".to_owned(),
        sections: vec![
            employer_section(&certificate.employer),
            employee_section(&certificate.employee),
            Section {
                kind: SectionKind::Summary,
                rows: vec![
                    Row::new(["Emploi occupé".to_owned(), certificate.job_title.clone()]),
                    Row::new(["Du".to_owned(), format::date(certificate.start_date)]),
                    Row::new(["Au".to_owned(), format::date(certificate.end_date)]),
                ],
            },
            legal_section(),
        ],
    }
}

fn employer_section(employer: &EmployerSnapshot) -> Section {
    let mut rows = vec![
        Row::new(["Raison sociale", employer.name.as_str()]),
        Row::new(["Adresse", employer.address.as_str()]),
        Row::new(["SIRET", employer.siret.as_str()]),
    ];
    if let Some(ape) = &employer.ape_code {
        rows.push(Row::new(["Code APE", ape.as_str()]));
    }
    Section {
        kind: SectionKind::Employer,
        rows,
    }
}

fn employee_section(employee: &EmployeeSnapshot) -> Section {
    let mut rows = vec![
        Row::new(["Nom", employee.full_name.as_str()]),
        Row::new(["Adresse", employee.address.as_str()]),
        Row::new(["N° de sécurité sociale", employee.nir.as_str()]),
    ];
    if let Some(title) = &employee.job_title {
        rows.push(Row::new(["Emploi", title.as_str()]));
    }
    Section {
        kind: SectionKind::Employee,
        rows,
    }
}

fn legal_section() -> Section {
    Section {
        kind: SectionKind::LegalMentions,
        rows: vec![
            Row::new(["Dans votre intérêt et pour vous aider à faire valoir vos droits, conservez ce bulletin de paie sans limitation de durée."]),
            Row::new(["Le montant net social sert au calcul de vos droits aux prestations sociales."]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paie_core::{EmployeeId, Nir, PayPeriod, Siret};
    use paie_engine::{
        compute_payslip, ComputationInput, PaidLeave, PayElement, RuleSets,
    };
    use rust_decimal_macros::dec;

    fn sample_payslip() -> Payslip {
        compute_payslip(
            ComputationInput {
                employee: EmployeeSnapshot {
                    employee_id: EmployeeId::new(),
                    full_name: "Claire Fontaine".to_owned(),
                    address: "12 rue de la Paix, 75002 Paris".to_owned(),
                    nir: Nir::parse("1850578006048").unwrap(),
                    job_title: Some("Ingénieure".to_owned()),
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
                    PayElement::addition("Salaire de base", Money(dec!(3000.00))).unwrap(),
                    PayElement::deduction("Absence", Money(dec!(150.00))).unwrap(),
                ],
                tax_withheld: Money(dec!(100.00)),
                paid_leave: PaidLeave {
                    acquired: dec!(2.5),
                    taken: dec!(0),
                    balance: dec!(12.5),
                },
            },
            &RuleSets::fiscal_only(vec![]),
        )
        .unwrap()
    }

    #[test]
    fn test_payslip_document_has_all_sections_in_order() {
        let doc = payslip_document(&sample_payslip(), None);
        assert!(doc.sections_in_order());
        let kinds: Vec<SectionKind> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL);
    }

    #[test]
    fn test_values_are_pre_formatted() {
        let doc = payslip_document(&sample_payslip(), None);
        let summary = doc
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Summary)
            .unwrap();
        assert_eq!(summary.rows[0].cells, ["Salaire brut", "3 000,00 €"]);
        assert_eq!(summary.rows[3].cells, ["Net payé", "2 900,00 €"]);
    }

    #[test]
    fn test_deduction_displayed_with_minus() {
        let doc = payslip_document(&sample_payslip(), None);
        let remuneration = doc
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Remuneration)
            .unwrap();
        let absence = remuneration
            .rows
            .iter()
            .find(|r| r.cells[0] == "Absence")
            .unwrap();
        assert_eq!(absence.cells[3], "-150,00 €");
    }

    #[test]
    fn test_title_carries_month() {
        let doc = payslip_document(&sample_payslip(), None);
        assert_eq!(doc.title, "Bulletin de paie — mars 2025");
    }

    #[test]
    fn test_contract_and_certificate_documents_in_order() {
        let slip = sample_payslip();
        let contract = ContractRecord {
            employee: slip.employee.clone(),
            employer: slip.employer.clone(),
            contract_kind: "Contrat à durée indéterminée".to_owned(),
            start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            gross_monthly_salary: Money(dec!(3000.00)),
            weekly_hours: dec!(35),
        };
        assert!(contract_document(&contract).sections_in_order());

        let certificate = CertificateRecord {
            employee: slip.employee.clone(),
            employer: slip.employer.clone(),
            start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            job_title: "Ingénieure".to_owned(),
        };
        assert!(certificate_document(&certificate).sections_in_order());
    }
}
