/// Sports the calendar knows how to decorate
///
/// The numeric ids are the data source's sport identifiers. Groups whose
/// name is missing can still be matched to an icon through them.
#[derive(Debug, Clone)]
pub struct KnownSport {
    pub id: i64,
    pub name: &'static str,
    pub icon: &'static str,
}

impl KnownSport {
    pub const fn new(id: i64, name: &'static str, icon: &'static str) -> Self {
        Self { id, name, icon }
    }
}

pub const DEFAULT_SPORT_ICON: &str = "🏃";

/// Get the list of sports with dedicated icons
pub fn get_known_sports() -> Vec<KnownSport> {
    vec![
        KnownSport::new(7011305, "american football", "🏈"),
        KnownSport::new(7011803, "archery", "🏹"),
        KnownSport::new(7020104, "badminton", "🏸"),
        KnownSport::new(7030819, "chess", "♟️"),
        KnownSport::new(7031809, "cricket", "🏏"),
        KnownSport::new(7061509, "football", "⚽"),
        KnownSport::new(7081503, "hockey", "🏒"),
        KnownSport::new(7110101, "kabaddi", "🤼"),
        KnownSport::new(7161103, "pickleball", "🏓"),
    ]
}
