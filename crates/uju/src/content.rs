//! Embedded content: the section facts and the space timeline.

use uju_core::Section;

/// The navigable fact sections.
pub const SECTIONS: &[Section] = &[
    Section {
        title: "Interesting Facts About the Milky Way",
        facts: &[
            "The Milky Way is 100,000 light-years wide.",
            "It contains 100-400 billion stars.",
            "We live in the Orion Arm.",
            "It moves at 2.1 million km/h.",
            "A black hole sits at its center.",
            "The Milky Way is still growing.",
        ],
    },
    Section {
        title: "Facts About the Sun",
        facts: &[
            "The Sun is 4.6 billion years old.",
            "It makes up 99.8% of the mass of the Solar System.",
            "The core temperature is around 15 million degrees C.",
            "Light takes 8 minutes to reach Earth.",
            "It will eventually become a red giant.",
            "The Sun's magnetic field is very strong.",
        ],
    },
    Section {
        title: "Facts About Mars",
        facts: &[
            "Mars is called the Red Planet.",
            "It has the tallest mountain in the Solar System: Olympus Mons.",
            "Mars has two moons: Phobos and Deimos.",
            "Mars' atmosphere is mostly carbon dioxide.",
            "Evidence suggests Mars once had water.",
            "Mars has the largest dust storms in the Solar System.",
        ],
    },
];

/// One entry on the timeline page.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
}

/// The space timeline, oldest first.
pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "13.8 Billion Years Ago",
        event: "The Big Bang occurs, creating the universe.",
    },
    TimelineEntry {
        year: "13.6 Billion Years Ago",
        event: "First stars form.",
    },
    TimelineEntry {
        year: "4.6 Billion Years Ago",
        event: "The Sun and Solar System form.",
    },
    TimelineEntry {
        year: "3.5 Billion Years Ago",
        event: "First life appears on Earth.",
    },
    TimelineEntry {
        year: "66 Million Years Ago",
        event: "Extinction of the dinosaurs (asteroid impact).",
    },
    TimelineEntry {
        year: "1969",
        event: "Humans land on the Moon (Apollo 11).",
    },
    TimelineEntry {
        year: "2021",
        event: "James Webb Space Telescope launched.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_titles_and_facts() {
        assert_eq!(SECTIONS.len(), 3);
        for section in SECTIONS {
            assert!(!section.title.is_empty());
            assert_eq!(section.facts.len(), 6);
        }
    }

    #[test]
    fn test_timeline_is_chronological_text() {
        assert_eq!(TIMELINE.len(), 7);
        assert!(TIMELINE[0].year.contains("13.8"));
        assert_eq!(TIMELINE[6].year, "2021");
    }
}
