//! Random value generators for demo rows.
//!
//! Every generator takes the RNG explicitly so a seeded run is reproducible,
//! and keeps its output within the column widths of the schema.

use chrono::{Days, NaiveDate};
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Genres always present in a seeded database, in this order.
pub const BASE_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "RPG",
    "Shooter",
    "Strategy",
    "Simulation",
    "Sports",
    "Puzzle",
    "Racing",
    "Horror",
    "Platformer",
    "Fighting",
    "MMO",
    "Indie",
    "Open World",
    "Survival",
    "Stealth",
    "Metroidvania",
];

const ADJECTIVES: &[&str] = &[
    "ancient", "silent", "crimson", "hidden", "iron", "lunar", "frozen", "golden", "wild",
    "broken", "electric", "shadow", "burning", "lost", "eternal", "hollow", "neon", "savage",
    "quiet", "stellar",
];

const NOUNS: &[&str] = &[
    "kingdom", "frontier", "legion", "harbor", "empire", "forge", "citadel", "horizon", "sanctum",
    "outpost", "realm", "odyssey", "vanguard", "labyrinth", "colony", "crusade", "dominion",
    "expanse", "reactor", "voyage",
];

const SUFFIXES: &[&str] = &[
    "Reborn", "Origins", "Remastered", "Chronicles", "Legends", "Tactics", "Online", "Zero",
    "Rising", "Unleashed",
];

const COMPANY_TAILS: &[&str] = &[
    "Studios", "Games", "Interactive", "Entertainment", "Software", "Works", "Labs", "Digital",
];

const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Japan", "South Korea", "China", "United Kingdom", "France",
    "Germany", "Poland", "Sweden", "Finland", "Russia", "Ukraine", "Brazil", "Australia", "Spain",
];

const DOMAINS: &[&str] = &["example.com", "mail.test", "inbox.test", "post.example"];

const WORDS: &[&str] = &[
    "the", "player", "explores", "a", "vast", "world", "with", "deep", "combat", "and",
    "memorable", "characters", "story", "quests", "music", "boss", "fights", "feel", "rewarding",
    "graphics", "controls", "tight", "levels", "design", "secrets", "hours", "multiplayer",
    "balanced", "crafting", "progression",
];

/// Earliest release date handed out.
const FIRST_RELEASE_YEAR: i32 = 1990;

/// Earliest company founding year handed out.
const FIRST_FOUNDED_YEAR: i32 = 1901;

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate(mut s: String, max_chars: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
    s
}

/// `adjective_noun123`, at most 50 characters.
pub fn username(rng: &mut impl Rng) -> String {
    let name = format!(
        "{}_{}{}",
        pick(rng, ADJECTIVES),
        pick(rng, NOUNS),
        rng.random_range(0..10_000)
    );
    truncate(name, 50)
}

/// An address derived from `username`, at most 100 characters.
pub fn email(rng: &mut impl Rng, username: &str) -> String {
    let address = format!(
        "{}.{}@{}",
        username.replace('_', "."),
        rng.random_range(0..1000),
        pick(rng, DOMAINS)
    );
    truncate(address, 100)
}

/// Opaque 20-character credential placeholder.
pub fn password_hash(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect()
}

/// A sentence of `words` random words, capitalized and terminated.
pub fn sentence(rng: &mut impl Rng, words: usize) -> String {
    let body: Vec<&str> = (0..words.max(1)).map(|_| pick(rng, WORDS)).collect();
    format!("{}.", capitalize(&body.join(" ")))
}

/// `sentences` sentences of 6–14 words each.
pub fn paragraph(rng: &mut impl Rng, sentences: usize) -> String {
    (0..sentences.max(1))
        .map(|_| {
            let words = rng.random_range(6..=14);
            sentence(rng, words)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bio present 70% of the time.
pub fn bio(rng: &mut impl Rng) -> Option<String> {
    rng.random_bool(0.7).then(|| sentence(rng, 15))
}

/// `Crimson Forge Studios`, at most 100 characters.
pub fn company_name(rng: &mut impl Rng) -> String {
    let name = format!(
        "{} {} {}",
        capitalize(pick(rng, ADJECTIVES)),
        capitalize(pick(rng, NOUNS)),
        pick(rng, COMPANY_TAILS)
    );
    truncate(name, 100)
}

pub fn country(rng: &mut impl Rng) -> String {
    pick(rng, COUNTRIES).to_string()
}

/// A website derived from the company name, at most 255 characters.
pub fn website(company_name: &str) -> String {
    let slug: String = company_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    truncate(format!("https://www.{slug}.example"), 255)
}

/// Founding year between 1901 and `current_year`.
pub fn founded_year(rng: &mut impl Rng, current_year: i32) -> i32 {
    rng.random_range(FIRST_FOUNDED_YEAR..=current_year.max(FIRST_FOUNDED_YEAR))
}

/// `count` genre names: [`BASE_GENRES`] first, then generated words.
///
/// Generated names may collide; the inserts skip duplicates.
pub fn genre_names(rng: &mut impl Rng, count: usize) -> Vec<String> {
    let mut names: Vec<String> = BASE_GENRES.iter().take(count).map(|g| g.to_string()).collect();
    while names.len() < count {
        names.push(capitalize(pick(rng, NOUNS)));
    }
    names
}

/// `The Crimson Kingdom Reborn`, at most 100 characters.
pub fn game_title(rng: &mut impl Rng) -> String {
    let mut title = format!(
        "{} {} {}",
        pick(rng, &["The", "A", "Beyond the", "Return to", "Tales of the"]),
        capitalize(pick(rng, ADJECTIVES)),
        capitalize(pick(rng, NOUNS)),
    );
    if rng.random_bool(0.6) {
        title.push(' ');
        title.push_str(pick(rng, SUFFIXES));
    }
    if rng.random_bool(0.5) {
        title.push_str(&format!(" {}", rng.random_range(2..=9)));
    }
    truncate(title, 100)
}

/// Description of at most 500 characters.
pub fn game_description(rng: &mut impl Rng) -> String {
    let sentences = rng.random_range(2..=5);
    truncate(paragraph(rng, sentences), 500)
}

/// A day between 1990-01-01 and `today`, inclusive.
pub fn release_date(rng: &mut impl Rng, today: NaiveDate) -> NaiveDate {
    let earliest = NaiveDate::from_ymd_opt(FIRST_RELEASE_YEAR, 1, 1).unwrap_or(today);
    let span = (today - earliest).num_days().max(0) as u64;
    earliest
        .checked_add_days(Days::new(rng.random_range(0..=span)))
        .unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn same_seed_same_values() {
        let a: Vec<_> = {
            let mut r = rng();
            (0..5).map(|_| game_title(&mut r)).collect()
        };
        let b: Vec<_> = {
            let mut r = rng();
            (0..5).map(|_| game_title(&mut r)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn values_fit_column_widths() {
        let mut r = rng();
        for _ in 0..200 {
            let user = username(&mut r);
            assert!(user.chars().count() <= 50);
            assert!(email(&mut r, &user).chars().count() <= 100);
            assert_eq!(password_hash(&mut r).len(), 20);

            let company = company_name(&mut r);
            assert!(company.chars().count() <= 100);
            assert!(website(&company).len() <= 255);
            assert!(country(&mut r).chars().count() <= 50);

            assert!(game_title(&mut r).chars().count() <= 100);
            assert!(game_description(&mut r).chars().count() <= 500);
        }
    }

    #[test]
    fn email_contains_username_and_domain() {
        let mut r = rng();
        let address = email(&mut r, "iron_forge12");
        assert!(address.starts_with("iron.forge12."));
        assert!(address.contains('@'));
    }

    #[test]
    fn release_dates_within_bounds() {
        let mut r = rng();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let earliest = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        for _ in 0..500 {
            let d = release_date(&mut r, today);
            assert!(d >= earliest && d <= today, "{d} out of range");
        }
    }

    #[test]
    fn founded_year_within_bounds() {
        let mut r = rng();
        for _ in 0..500 {
            let y = founded_year(&mut r, 2024);
            assert!((1901..=2024).contains(&y));
        }
    }

    #[test]
    fn genre_names_start_with_base_list() {
        let mut r = rng();
        let names = genre_names(&mut r, 20);
        assert_eq!(names.len(), 20);
        assert_eq!(names[0], "Action");
        assert_eq!(names[17], "Metroidvania");

        let few = genre_names(&mut r, 3);
        assert_eq!(few, vec!["Action", "Adventure", "RPG"]);
    }

    #[test]
    fn website_slug_is_ascii() {
        assert_eq!(
            website("Crimson Forge Studios"),
            "https://www.crimsonforgestudios.example"
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo".to_string(), 2), "hé");
        assert_eq!(truncate("abc".to_string(), 10), "abc");
    }
}
