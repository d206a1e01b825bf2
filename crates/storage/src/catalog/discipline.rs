use serde::{Deserialize, Serialize};

/// Every discipline the system knows about, with a stable integer id that
/// matches the `discipline_id` column on results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Discipline {
    Run50m = 1,
    Run60m = 2,
    Run100m = 3,
    Run150m = 4,
    Run200m = 5,
    Run300m = 6,
    Run400m = 7,
    Run500m = 8,
    Run600m = 9,
    Run800m = 10,
    Run1000m = 11,
    Run1500m = 12,
    Run1Mile = 13,
    Run2000m = 14,
    Run3000m = 15,
    Run5000m = 16,
    Run10000m = 17,
    Hurdles50m = 18,
    Hurdles60m = 19,
    Hurdles80m = 20,
    Hurdles100m = 21,
    Hurdles110m = 22,
    Hurdles200m = 23,
    Hurdles300m = 24,
    Hurdles400m = 25,
    Steeplechase1500m = 26,
    Steeplechase2000m = 27,
    Steeplechase3000m = 28,
    LongJump = 29,
    TripleJump = 30,
    HighJump = 31,
    PoleVault = 32,
    StandingLongJump = 33,
    ShotPut = 34,
    DiscusThrow = 35,
    JavelinThrow = 36,
    HammerThrow = 37,
    CricketBallThrow = 38,
    Run4x60m = 39,
    Run4x100m = 40,
    Run4x200m = 41,
    Run4x300m = 42,
    Run4x400m = 43,
    Walk3000m = 44,
    Walk5000m = 45,
    Walk10km = 46,
    Walk20km = 47,
    Triathlon = 48,
    Tetrathlon = 49,
    Pentathlon = 50,
    Heptathlon = 51,
    Decathlon = 52,
}

/// What kind of value a discipline records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
    Meters,
    Points,
    None,
}

impl Unit {
    /// Display suffix ("s", "m", "pts", or empty).
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Seconds => "s",
            Unit::Meters => "m",
            Unit::Points => "pts",
            Unit::None => "",
        }
    }
}

/// How a raw performance value turns into a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatClass {
    /// Elapsed seconds rendered as M:SS.ff, or H:MM:SS past one hour.
    Duration,
    /// Two decimals, but values above 30 are read as centimeters.
    JumpHeuristic,
    /// Plain two-decimal rendering.
    Plain,
}

/// One row of the discipline catalog.
#[derive(Debug, Clone, Copy)]
pub struct DisciplineEntry {
    pub discipline: Discipline,
    pub name: &'static str,
    pub unit: Unit,
    pub format: FormatClass,
}

const fn entry(
    discipline: Discipline,
    name: &'static str,
    unit: Unit,
    format: FormatClass,
) -> DisciplineEntry {
    DisciplineEntry {
        discipline,
        name,
        unit,
        format,
    }
}

/// The complete catalog, in display order. The order here is also the
/// canonical "catalog order" used when listing disciplines.
pub const DISCIPLINES: &[DisciplineEntry] = &[
    entry(Discipline::Run50m, "50m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run60m, "60m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run100m, "100m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run150m, "150m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run200m, "200m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run300m, "300m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run400m, "400m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run500m, "500m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run600m, "600m", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run800m, "800m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run1000m, "1000m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run1500m, "1500m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run1Mile, "1 Mile", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run2000m, "2000m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run3000m, "3000m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run5000m, "5000m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Run10000m, "10000m", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Hurdles50m, "50m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles60m, "60m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles80m, "80m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles100m, "100m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles110m, "110m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles200m, "200m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles300m, "300m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Hurdles400m, "400m Hurdles", Unit::Seconds, FormatClass::Plain),
    entry(
        Discipline::Steeplechase1500m,
        "1500m Steeplechase",
        Unit::Seconds,
        FormatClass::Duration,
    ),
    entry(
        Discipline::Steeplechase2000m,
        "2000m Steeplechase",
        Unit::Seconds,
        FormatClass::Duration,
    ),
    entry(
        Discipline::Steeplechase3000m,
        "3000m Steeplechase",
        Unit::Seconds,
        FormatClass::Duration,
    ),
    entry(Discipline::LongJump, "Long Jump", Unit::Meters, FormatClass::JumpHeuristic),
    entry(Discipline::TripleJump, "Triple Jump", Unit::Meters, FormatClass::JumpHeuristic),
    entry(Discipline::HighJump, "High Jump", Unit::Meters, FormatClass::JumpHeuristic),
    entry(Discipline::PoleVault, "Pole Vault", Unit::Meters, FormatClass::JumpHeuristic),
    entry(
        Discipline::StandingLongJump,
        "Standing Long Jump",
        Unit::Meters,
        FormatClass::JumpHeuristic,
    ),
    entry(Discipline::ShotPut, "Shot Put", Unit::Meters, FormatClass::Plain),
    entry(Discipline::DiscusThrow, "Discus Throw", Unit::Meters, FormatClass::Plain),
    entry(Discipline::JavelinThrow, "Javelin Throw", Unit::Meters, FormatClass::Plain),
    entry(Discipline::HammerThrow, "Hammer Throw", Unit::Meters, FormatClass::Plain),
    entry(
        Discipline::CricketBallThrow,
        "Cricket Ball Throw",
        Unit::Meters,
        FormatClass::Plain,
    ),
    entry(Discipline::Run4x60m, "4x60m Relay", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run4x100m, "4x100m Relay", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run4x200m, "4x200m Relay", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run4x300m, "4x300m Relay", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Run4x400m, "4x400m Relay", Unit::Seconds, FormatClass::Plain),
    entry(Discipline::Walk3000m, "3000m Walk", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Walk5000m, "5000m Walk", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Walk10km, "10km Walk", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Walk20km, "20km Walk", Unit::Seconds, FormatClass::Duration),
    entry(Discipline::Triathlon, "Triathlon", Unit::Points, FormatClass::Plain),
    entry(Discipline::Tetrathlon, "Tetrathlon", Unit::Points, FormatClass::Plain),
    entry(Discipline::Pentathlon, "Pentathlon", Unit::Points, FormatClass::Plain),
    entry(Discipline::Heptathlon, "Heptathlon", Unit::Points, FormatClass::Plain),
    entry(Discipline::Decathlon, "Decathlon", Unit::Points, FormatClass::Plain),
];

impl Discipline {
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Discipline> {
        DISCIPLINES
            .iter()
            .map(|e| e.discipline)
            .find(|d| d.id() == id)
    }

    fn entry(self) -> &'static DisciplineEntry {
        // The catalog is total over the enum, so the lookup cannot miss.
        DISCIPLINES
            .iter()
            .find(|e| e.discipline == self)
            .unwrap_or(&DISCIPLINES[0])
    }

    /// Human-readable display name, e.g. "110m Hurdles".
    pub fn friendly_name(self) -> &'static str {
        self.entry().name
    }

    pub fn unit(self) -> Unit {
        self.entry().unit
    }

    pub fn format_class(self) -> FormatClass {
        self.entry().format
    }

    /// Reverse lookup by display name, case-insensitive. Used by the
    /// bulk importer to resolve `DisciplineName` fields.
    pub fn from_friendly_name(name: &str) -> Option<Discipline> {
        DISCIPLINES
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.discipline)
    }

    /// Ids of disciplines where a lower value is the better performance.
    pub fn lower_is_better_ids() -> Vec<i32> {
        DISCIPLINES
            .iter()
            .filter(|e| e.unit == Unit::Seconds)
            .map(|e| e.discipline.id())
            .collect()
    }
}
