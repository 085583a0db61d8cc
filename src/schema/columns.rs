/// Working electrode potential (V)
pub const POTENTIAL: &str = "potential";
/// Current (A)
pub const CURRENT: &str = "current";
/// Time (s)
pub const TIME: &str = "time";
/// Reconstructed cycle number
pub const CYCLE: &str = "cycle";
/// Redox direction ("oxidation" or "reduction")
pub const REDOX: &str = "redox";
/// Row of the raw export the sample came from
pub const SOURCE_ROW: &str = "source_row";

/// Instrument name (nullable, repeated per row)
pub const INSTRUMENT: &str = "instrument";
/// Scan rate in mV/s (nullable, repeated per row)
pub const SCAN_RATE: &str = "scan_rate";
/// Electrolyte pH (nullable, repeated per row)
pub const PH: &str = "ph";
/// Electrolyte temperature in K (nullable, repeated per row)
pub const TEMPERATURE: &str = "temperature";

/// Integrated positive current (C)
pub const ANODIC_CHARGE: &str = "anodic_charge";
/// Integrated negative current magnitude (C)
pub const CATHODIC_CHARGE: &str = "cathodic_charge";
/// Sum of anodic and cathodic charge (C)
pub const TOTAL_CHARGE: &str = "total_charge";
/// Standard error of the mean anodic charge
pub const ANODIC_CHARGE_ERR: &str = "anodic_charge_err";
/// Standard error of the mean cathodic charge
pub const CATHODIC_CHARGE_ERR: &str = "cathodic_charge_err";
/// Number of cycles averaged
pub const CYCLES: &str = "cycles";

/// Maximum-charge section index
pub const SECTION: &str = "section";
/// Section kind ("anodic" or "cathodic")
pub const KIND: &str = "type";
/// Section start time (s)
pub const T_MIN: &str = "t_min";
/// Section end time (s)
pub const T_MAX: &str = "t_max";
