//! Shared snapshot fixtures for the unit tests of this crate.

use paie_core::{EmployeeId, Nir, Siret};

use crate::payslip::{EmployeeSnapshot, EmployerSnapshot};

pub(crate) fn employee() -> EmployeeSnapshot {
    EmployeeSnapshot {
        employee_id: EmployeeId::new(),
        full_name: "Claire Fontaine".to_owned(),
        address: "12 rue de la Paix, 75002 Paris".to_owned(),
        nir: Nir::parse("1850578006048").unwrap(),
        job_title: Some("Ingénieure".to_owned()),
    }
}

pub(crate) fn employer() -> EmployerSnapshot {
    EmployerSnapshot {
        name: "Exemple SAS".to_owned(),
        address: "4 avenue Gambetta, 69003 Lyon".to_owned(),
        siret: Siret::parse("73282932000074").unwrap(),
        ape_code: Some("6201Z".to_owned()),
    }
}
