//! Word lists drawn on by the command templates.

use std::sync::LazyLock;

/// Adjectives shared by both the singular and plural lists.
pub const ADJECTIVES: &[&str] = &[
    "FreeBSD-based",
    "French",
    "Lovecraftian",
    "Russian",
    "Sangerian",
    "Syrian",
    "abstruse",
    "actually convex",
    "actually not at all real",
    "angered",
    "apologetic",
    "apoplectic",
    "aroused",
    "bent",
    "blue",
    "bombastic",
    "chill",
    "combustible",
    "concave",
    "confused",
    "confusing",
    "convincing",
    "dancing",
    "dead",
    "dereferenced",
    "disrespectful",
    "disturbing",
    "donkey-like",
    "drunk",
    "eldritch",
    "elongated",
    "ephemeral",
    "explosive",
    "extruded",
    "fake",
    "fiery",
    "flaccid",
    "flailing",
    "fluffy",
    "fluorescent",
    "frigid",
    "frozen",
    "funny-shaped",
    "gangrenous",
    "glorious",
    "green",
    "gummy",
    "high-velocity",
    "indescribable",
    "inert",
    "invalidated",
    "irradiated",
    "lopsided",
    "metallic",
    "naive",
    "non-manifold",
    "nuclear",
    "obtuse",
    "patriotic, but only on the internet,",
    "poofed",
    "projected",
    "psychotic",
    "purportedly convex",
    "real",
    "really damn pissed off",
    "red",
    "rugged",
    "stencilled",
    "sterling",
    "taut",
    "tight",
    "touchy-feely",
    "translucent",
    "upside-down",
    "very much alive and not at all dead",
    "viscous",
    "wooden",
];

const PLURAL_ONLY: &[&str] = &["not-racist-and-totally-have-black-friends"];

const SINGULAR_ONLY: &[&str] = &["Pickman's", "not-racist-and-totally-has-black-friends"];

/// Adjectives that read correctly in front of a plural noun.
pub static PLURAL_ADJECTIVES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| [ADJECTIVES, PLURAL_ONLY].concat());

/// Adjectives that read correctly in front of a singular noun.
pub static SINGULAR_ADJECTIVES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| [ADJECTIVES, SINGULAR_ONLY].concat());

/// Places one might be struck.
pub const APPENDAGES: &[&str] = &[
    "ankle",
    "arm",
    "armpit",
    "belly-button",
    "brain",
    "butt",
    "chest",
    "earhole",
    "earlobe",
    "eyesocket",
    "flappy, wobbly growth",
    "groin",
    "groinal sort of area",
    "head",
    "hidden eleventh toe",
    "kidneys",
    "knee",
    "kneecap",
    "left nipple",
    "leg",
    "liver",
    "neck",
    "nostril",
    "right nipple",
    "shoulder",
    "temple",
    "third nipple",
    "torso",
    "wrist",
    "inherited donkey",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_extend_the_base_list() {
        assert_eq!(PLURAL_ADJECTIVES.len(), ADJECTIVES.len() + 1);
        assert_eq!(SINGULAR_ADJECTIVES.len(), ADJECTIVES.len() + 2);
        assert_eq!(&PLURAL_ADJECTIVES[..ADJECTIVES.len()], ADJECTIVES);
        assert_eq!(&SINGULAR_ADJECTIVES[..ADJECTIVES.len()], ADJECTIVES);
        assert!(SINGULAR_ADJECTIVES.contains(&"Pickman's"));
        assert!(!PLURAL_ADJECTIVES.contains(&"Pickman's"));
    }

    #[test]
    fn appendage_count() {
        assert_eq!(APPENDAGES.len(), 30);
    }
}
