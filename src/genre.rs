/// A music genre offered for playlist generation 🎶
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Genre {
    pub name: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
}

impl Genre {
    const fn new(name: &'static str, emoji: &'static str, tagline: &'static str) -> Self {
        Self {
            name,
            emoji,
            tagline,
        }
    }

    /// Confirmation shown once the genre is picked.
    pub fn message(&self) -> String {
        format!("{} Let's groove to {}! {}", self.tagline, self.name, self.emoji)
    }
}

/// Popup order. Names are unique.
pub static GENRES: [Genre; 10] = [
    Genre::new("Afrobeats", "🌍", "Feel the vibrant energy!"),
    Genre::new("Hip Hop", "🎤", "Drop the beat and spit some bars!"),
    Genre::new("Pop", "🎉", "Catchy hooks incoming!"),
    Genre::new("Rock", "🎸", "Turn the amps up to eleven!"),
    Genre::new("Jazz", "🎷", "Smooth and swinging!"),
    Genre::new("R&B", "💜", "Slow it down and feel the soul!"),
    Genre::new("Reggae", "🌴", "One love, one vibe!"),
    Genre::new("Classical", "🎻", "Timeless elegance awaits!"),
    Genre::new("Electronic", "🎧", "Let the synths take over!"),
    Genre::new("Country", "🤠", "Saddle up for some storytelling!"),
];

pub fn catalog() -> &'static [Genre] {
    &GENRES
}

/// Case-insensitive lookup.
pub fn by_name(name: &str) -> Option<&'static Genre> {
    let name = name.trim();
    GENRES.iter().find(|g| g.name.eq_ignore_ascii_case(name))
}
