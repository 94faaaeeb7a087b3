use std::fmt;

/// Recognized field data-type tags, plus an explicit catch-all.
///
/// Unrecognized tags map to [`FieldKind::Unsupported`], which generates
/// null placeholders instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Address,
    Boolean,
    Cat,
    City,
    Country,
    CurrencyCode,
    CurrencyName,
    Date,
    Decimal,
    Double,
    Float,
    FirstName,
    Int,
    Job,
    LastName,
    Lorem,
    Name,
    State,
    Str,
    StreetAddress,
    Time,
    Timestamp,
    ZipCode,
    Unsupported,
}

impl FieldKind {
    /// Case-insensitive tag lookup; `string` is an alias for `str`.
    pub fn parse(tag: &str) -> FieldKind {
        match tag.to_ascii_lowercase().as_str() {
            "address" => FieldKind::Address,
            "boolean" => FieldKind::Boolean,
            "cat" => FieldKind::Cat,
            "city" => FieldKind::City,
            "country" => FieldKind::Country,
            "currency_code" => FieldKind::CurrencyCode,
            "currency_name" => FieldKind::CurrencyName,
            "date" => FieldKind::Date,
            "decimal" => FieldKind::Decimal,
            "double" => FieldKind::Double,
            "float" => FieldKind::Float,
            "first_name" => FieldKind::FirstName,
            "int" => FieldKind::Int,
            "job" => FieldKind::Job,
            "last_name" => FieldKind::LastName,
            "lorem" => FieldKind::Lorem,
            "name" => FieldKind::Name,
            "state" => FieldKind::State,
            "str" | "string" => FieldKind::Str,
            "street_address" => FieldKind::StreetAddress,
            "time" => FieldKind::Time,
            "timestamp" => FieldKind::Timestamp,
            "zip_code" => FieldKind::ZipCode,
            _ => FieldKind::Unsupported,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            FieldKind::Address => "address",
            FieldKind::Boolean => "boolean",
            FieldKind::Cat => "cat",
            FieldKind::City => "city",
            FieldKind::Country => "country",
            FieldKind::CurrencyCode => "currency_code",
            FieldKind::CurrencyName => "currency_name",
            FieldKind::Date => "date",
            FieldKind::Decimal => "decimal",
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::FirstName => "first_name",
            FieldKind::Int => "int",
            FieldKind::Job => "job",
            FieldKind::LastName => "last_name",
            FieldKind::Lorem => "lorem",
            FieldKind::Name => "name",
            FieldKind::State => "state",
            FieldKind::Str => "str",
            FieldKind::StreetAddress => "street_address",
            FieldKind::Time => "time",
            FieldKind::Timestamp => "timestamp",
            FieldKind::ZipCode => "zip_code",
            FieldKind::Unsupported => "unsupported",
        };
        f.write_str(tag)
    }
}
