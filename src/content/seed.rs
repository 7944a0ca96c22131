use crate::content::deck::{Align, ContentDeck, HeroPhrase, NavItem, ShowcasePhase};

/// The built-in studio deck.
///
/// Ships the stock Botak Studio narrative so the CLI and demos have real
/// content to run against without a deck file on disk.
pub fn studio_deck() -> ContentDeck {
    ContentDeck {
        hero: vec![
            HeroPhrase {
                text: "BOTAK STUDIO".to_owned(),
                sub: "VISUAL EFFECTS & ANIMATION".to_owned(),
                align: Align::Center,
                color: "#ffffff".to_owned(),
                order: 1,
            },
            HeroPhrase {
                text: "WE DON'T JUST EDIT".to_owned(),
                sub: "WE ENGINEER EMOTION".to_owned(),
                align: Align::Left,
                color: "#E4405F".to_owned(),
                order: 2,
            },
            HeroPhrase {
                text: "WE CRAFT REALITY".to_owned(),
                sub: "PIXEL BY PIXEL".to_owned(),
                align: Align::Right,
                color: "#3a7ec4".to_owned(),
                order: 3,
            },
            HeroPhrase {
                text: "LET'S CREATE".to_owned(),
                sub: "SOMETHING LEGENDARY".to_owned(),
                align: Align::Center,
                color: "#3ac48a".to_owned(),
                order: 4,
            },
        ],
        showcase: vec![
            ShowcasePhase {
                title: "VFX".to_owned(),
                subtitle: "VISUAL EFFECTS".to_owned(),
                description: "Explosive visual effects, particle systems, and cinematic \
                              compositing that bring imagination to reality."
                    .to_owned(),
                outline_text: "EFFECTS".to_owned(),
                color: "#c45e3a".to_owned(),
                order: 1,
                video: Some("/Take_U_YT.mp4".to_owned()),
                video_scale: Some(1.5),
            },
            ShowcasePhase {
                title: "MUSIC".to_owned(),
                subtitle: "MUSIC VIDEO".to_owned(),
                description: "Creative editing, color grading, and visual storytelling that \
                              captures the rhythm and emotion of sound."
                    .to_owned(),
                outline_text: "RHYTHM".to_owned(),
                color: "#3a7ec4".to_owned(),
                order: 2,
                video: Some("/cry_for_me_rui_part.mp4".to_owned()),
                video_scale: Some(1.5),
            },
            ShowcasePhase {
                title: "MOTION".to_owned(),
                subtitle: "ANIMATION".to_owned(),
                description: "Character animation, motion graphics, and 3D artistry that \
                              breathes life into every frame."
                    .to_owned(),
                outline_text: "ANIMATE".to_owned(),
                color: "#8a3ac4".to_owned(),
                order: 3,
                video: Some("/Till_Further_Notice_Insta.mp4".to_owned()),
                video_scale: None,
            },
            ShowcasePhase {
                title: "CREATE".to_owned(),
                subtitle: "CONTENT CREATION".to_owned(),
                description: "Gaming montages, vlogs, tutorials, and social media content \
                              that captivates and engages audiences."
                    .to_owned(),
                outline_text: "CREATE".to_owned(),
                color: "#3ac48a".to_owned(),
                order: 4,
                video: Some("/Insta.mp4".to_owned()),
                video_scale: Some(1.5),
            },
        ],
        nav: vec![
            NavItem {
                label: "Home".to_owned(),
                href: "#home".to_owned(),
                order: 1,
            },
            NavItem {
                label: "Services".to_owned(),
                href: "#services".to_owned(),
                order: 2,
            },
            NavItem {
                label: "Works".to_owned(),
                href: "#works".to_owned(),
                order: 3,
            },
            NavItem {
                label: "About".to_owned(),
                href: "#about".to_owned(),
                order: 4,
            },
            NavItem {
                label: "Contact".to_owned(),
                href: "#contact".to_owned(),
                order: 5,
            },
        ],
    }
}
