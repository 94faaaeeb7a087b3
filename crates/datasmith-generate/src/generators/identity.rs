use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::currency::en::{CurrencyCode, CurrencyName};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::RngCore;

use crate::errors::GenerateError;
use crate::generators::{Constraints, Generator, GeneratorRegistry};
use crate::kind::FieldKind;
use crate::value::CellValue;

pub(super) fn register(registry: &mut GeneratorRegistry) {
    for kind in [
        FieldKind::Address,
        FieldKind::City,
        FieldKind::Country,
        FieldKind::CurrencyCode,
        FieldKind::CurrencyName,
        FieldKind::FirstName,
        FieldKind::Job,
        FieldKind::LastName,
        FieldKind::Name,
        FieldKind::State,
        FieldKind::StreetAddress,
        FieldKind::ZipCode,
    ] {
        registry.register(Box::new(IdentityGenerator { kind }));
    }
}

/// Locale-shaped free text. Declared length and value bounds are ignored.
struct IdentityGenerator {
    kind: FieldKind,
}

impl Generator for IdentityGenerator {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn generate(
        &self,
        _constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let text = match self.kind {
            FieldKind::Address => {
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                let city: String = CityName().fake_with_rng(rng);
                let state: String = StateAbbr().fake_with_rng(rng);
                let zip: String = ZipCode().fake_with_rng(rng);
                format!("{number} {street}\n{city}, {state} {zip}")
            }
            FieldKind::City => CityName().fake_with_rng(rng),
            FieldKind::Country => CountryName().fake_with_rng(rng),
            FieldKind::CurrencyCode => CurrencyCode().fake_with_rng(rng),
            FieldKind::CurrencyName => CurrencyName().fake_with_rng(rng),
            FieldKind::FirstName => FirstName().fake_with_rng(rng),
            FieldKind::Job => JobTitle().fake_with_rng(rng),
            FieldKind::LastName => LastName().fake_with_rng(rng),
            FieldKind::Name => Name().fake_with_rng(rng),
            FieldKind::State => StateName().fake_with_rng(rng),
            FieldKind::StreetAddress => {
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                format!("{number} {street}")
            }
            FieldKind::ZipCode => ZipCode().fake_with_rng(rng),
            other => {
                return Err(GenerateError::InvalidConstraint(format!(
                    "no identity faker for kind '{other}'"
                )));
            }
        };
        Ok(CellValue::Text(text))
    }
}
