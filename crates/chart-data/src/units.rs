// File: crates/chart-data/src/units.rs
// Summary: Measurement types, unit families, conversion factors, and the fallback table.

/// Measurement type declared by a series, or resolved for a whole chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Duration,
    Size,
    Rate,
    Percentage,
    Number,
}

impl ValueType {
    /// Type substituted when input series disagree or carry no declaration.
    pub const FALLBACK: ValueType = ValueType::Number;

    /// Parse a declared type name as it arrives from host metadata.
    pub fn parse(s: &str) -> Option<ValueType> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duration" => Some(ValueType::Duration),
            "size" => Some(ValueType::Size),
            "rate" => Some(ValueType::Rate),
            "percentage" => Some(ValueType::Percentage),
            "number" | "integer" | "float" => Some(ValueType::Number),
            _ => None,
        }
    }
}

/// Time units. Factor converts to milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl DurationUnit {
    pub fn factor(self) -> f64 {
        match self {
            DurationUnit::Nanosecond => 1e-6,
            DurationUnit::Microsecond => 1e-3,
            DurationUnit::Millisecond => 1.0,
            DurationUnit::Second => 1_000.0,
            DurationUnit::Minute => 60_000.0,
            DurationUnit::Hour => 3_600_000.0,
            DurationUnit::Day => 86_400_000.0,
            DurationUnit::Week => 604_800_000.0,
        }
    }
}

/// Storage units. Factor converts to bytes.
/// Decimal (kilo-) and binary (kibi-) prefixes are distinct units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
}

impl SizeUnit {
    pub fn factor(self) -> f64 {
        match self {
            SizeUnit::Bit => 0.125,
            SizeUnit::Byte => 1.0,
            SizeUnit::Kilobyte => 1e3,
            SizeUnit::Megabyte => 1e6,
            SizeUnit::Gigabyte => 1e9,
            SizeUnit::Terabyte => 1e12,
            SizeUnit::Kibibyte => 1024.0,
            SizeUnit::Mebibyte => 1024.0 * 1024.0,
            SizeUnit::Gibibyte => 1024.0 * 1024.0 * 1024.0,
            SizeUnit::Tebibyte => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        }
    }
}

/// Event-rate units. Factor converts to events per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateUnit {
    PerSecond,
    PerMinute,
    PerHour,
}

impl RateUnit {
    pub fn factor(self) -> f64 {
        match self {
            RateUnit::PerSecond => 1.0,
            RateUnit::PerMinute => 1.0 / 60.0,
            RateUnit::PerHour => 1.0 / 3_600.0,
        }
    }

    /// Suffix appended to formatted rate values.
    pub fn suffix(self) -> &'static str {
        match self {
            RateUnit::PerSecond => "/s",
            RateUnit::PerMinute => "/min",
            RateUnit::PerHour => "/hr",
        }
    }
}

/// A concrete unit tagged with its family.
/// Percentage and plain-number types carry no unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Duration(DurationUnit),
    Size(SizeUnit),
    Rate(RateUnit),
}

impl Unit {
    /// Multiplier into the family base (milliseconds, bytes, per-second).
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Duration(u) => u.factor(),
            Unit::Size(u) => u.factor(),
            Unit::Rate(u) => u.factor(),
        }
    }

    /// Whether two units share a family and can be converted between.
    pub fn same_family(&self, other: &Unit) -> bool {
        matches!(
            (self, other),
            (Unit::Duration(_), Unit::Duration(_))
                | (Unit::Size(_), Unit::Size(_))
                | (Unit::Rate(_), Unit::Rate(_))
        )
    }

    /// Default unit for a resolved type when input series disagree.
    /// Percentage and Number have no natural unit.
    pub fn fallback_for(value_type: ValueType) -> Option<Unit> {
        match value_type {
            ValueType::Duration => Some(Unit::Duration(DurationUnit::Millisecond)),
            ValueType::Size => Some(Unit::Size(SizeUnit::Byte)),
            ValueType::Rate => Some(Unit::Rate(RateUnit::PerSecond)),
            ValueType::Percentage | ValueType::Number => None,
        }
    }

    /// Parse a declared unit name as it arrives from host metadata.
    pub fn parse(s: &str) -> Option<Unit> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nanosecond" => Some(Unit::Duration(DurationUnit::Nanosecond)),
            "microsecond" => Some(Unit::Duration(DurationUnit::Microsecond)),
            "millisecond" => Some(Unit::Duration(DurationUnit::Millisecond)),
            "second" => Some(Unit::Duration(DurationUnit::Second)),
            "minute" => Some(Unit::Duration(DurationUnit::Minute)),
            "hour" => Some(Unit::Duration(DurationUnit::Hour)),
            "day" => Some(Unit::Duration(DurationUnit::Day)),
            "week" => Some(Unit::Duration(DurationUnit::Week)),
            "bit" => Some(Unit::Size(SizeUnit::Bit)),
            "byte" => Some(Unit::Size(SizeUnit::Byte)),
            "kilobyte" => Some(Unit::Size(SizeUnit::Kilobyte)),
            "megabyte" => Some(Unit::Size(SizeUnit::Megabyte)),
            "gigabyte" => Some(Unit::Size(SizeUnit::Gigabyte)),
            "terabyte" => Some(Unit::Size(SizeUnit::Terabyte)),
            "kibibyte" => Some(Unit::Size(SizeUnit::Kibibyte)),
            "mebibyte" => Some(Unit::Size(SizeUnit::Mebibyte)),
            "gibibyte" => Some(Unit::Size(SizeUnit::Gibibyte)),
            "tebibyte" => Some(Unit::Size(SizeUnit::Tebibyte)),
            "1/second" | "per_second" => Some(Unit::Rate(RateUnit::PerSecond)),
            "1/minute" | "per_minute" => Some(Unit::Rate(RateUnit::PerMinute)),
            "1/hour" | "per_hour" => Some(Unit::Rate(RateUnit::PerHour)),
            _ => None,
        }
    }
}
