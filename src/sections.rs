//! Section registry: the fixed set of content sections and their placement.
//!
//! Each section is one planet in the hub. The registry is immutable
//! configuration; [`ORDERED_SECTIONS`] defines the total order used by
//! index-based navigation.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

/// Identifier for a content section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    About,
    Rules,
    Prizes,
    Sponsor,
    Contact,
    Register,
    Faq,
}

/// Sections in navigation order.
pub const ORDERED_SECTIONS: [SectionId; 7] = [
    SectionId::About,
    SectionId::Rules,
    SectionId::Prizes,
    SectionId::Sponsor,
    SectionId::Contact,
    SectionId::Register,
    SectionId::Faq,
];

/// Number of sections.
pub const SECTION_COUNT: usize = ORDERED_SECTIONS.len();

impl SectionId {
    /// Stable lowercase identifier, as used in links and configuration.
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Rules => "rules",
            SectionId::Prizes => "prizes",
            SectionId::Sponsor => "sponsor",
            SectionId::Contact => "contact",
            SectionId::Register => "register",
            SectionId::Faq => "faq",
        }
    }

    /// English name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Rules => "Rules",
            SectionId::Prizes => "Prizes",
            SectionId::Sponsor => "Sponsors",
            SectionId::Contact => "Contact",
            SectionId::Register => "Registration",
            SectionId::Faq => "FAQ",
        }
    }

    /// Position in [`ORDERED_SECTIONS`].
    pub fn index(&self) -> usize {
        // Discriminants follow declaration order, which is the navigation order.
        *self as usize
    }

    /// Section at `index` in navigation order.
    pub fn from_index(index: usize) -> Option<SectionId> {
        ORDERED_SECTIONS.get(index).copied()
    }

    /// Orbital placement for this section.
    pub fn placement(&self) -> &'static SectionPlacement {
        &PLACEMENTS[self.index()]
    }

    /// Label, color and texture for this section.
    pub fn appearance(&self) -> &'static SectionAppearance {
        &APPEARANCES[self.index()]
    }

    /// Panel content for this section.
    pub fn content(&self) -> &'static SectionContent {
        &CONTENTS[self.index()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a registered section.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section identifier `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDERED_SECTIONS
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Where a section's planet sits in the hub.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPlacement {
    pub id: SectionId,
    /// Distance from the sun (world units).
    pub radius: f32,
    /// Planet sphere radius (world units).
    pub size: f32,
    /// Initial orbital angle about +Y (radians).
    pub angle: f32,
    /// Orbital angular speed (radians per second).
    pub orbit_speed: f32,
}

/// How a section is drawn in the scene and in the chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionAppearance {
    /// Albedo texture path relative to the asset root.
    pub albedo: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Accent color as sRGB bytes.
    pub color: [u8; 3],
}

impl SectionAppearance {
    /// Accent color as a Bevy color.
    pub fn bevy_color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb_u8(r, g, b)
    }
}

/// Text shown in the content panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionContent {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

const PLACEMENTS: [SectionPlacement; SECTION_COUNT] = [
    SectionPlacement { id: SectionId::About, radius: 2.2, size: 0.6, angle: 0.0, orbit_speed: 0.1 },
    SectionPlacement { id: SectionId::Rules, radius: 3.0, size: 0.6, angle: 1.2, orbit_speed: 0.1 },
    SectionPlacement { id: SectionId::Prizes, radius: 3.9, size: 0.6, angle: 2.5, orbit_speed: 0.1 },
    SectionPlacement { id: SectionId::Sponsor, radius: 4.9, size: 0.6, angle: 3.8, orbit_speed: 0.1 },
    SectionPlacement { id: SectionId::Contact, radius: 5.8, size: 0.6, angle: 5.0, orbit_speed: 0.1 },
    SectionPlacement { id: SectionId::Register, radius: 6.8, size: 0.6, angle: 0.8, orbit_speed: 0.1 },
    SectionPlacement { id: SectionId::Faq, radius: 7.7, size: 0.6, angle: 2.2, orbit_speed: 0.1 },
];

const APPEARANCES: [SectionAppearance; SECTION_COUNT] = [
    SectionAppearance {
        albedo: "textures/8k_earth_daymap.webp",
        label: "Олимпиадын тухай",
        color: [16, 185, 129],
    },
    SectionAppearance {
        albedo: "textures/8k_mars.webp",
        label: "Шалгалт",
        color: [249, 115, 22],
    },
    SectionAppearance {
        albedo: "textures/8k_jupiter.webp",
        label: "Шагналын сан",
        color: [168, 85, 247],
    },
    SectionAppearance {
        albedo: "textures/8k_saturn.webp",
        label: "Ивээн тэтгэч",
        color: [59, 130, 246],
    },
    SectionAppearance {
        albedo: "textures/8k_mercury.webp",
        label: "Холбоо барих",
        color: [139, 92, 246],
    },
    SectionAppearance {
        albedo: "textures/8k_venus_surface.webp",
        label: "Бүртгүүлэх",
        color: [20, 184, 166],
    },
    SectionAppearance {
        albedo: "textures/2k_uranus.webp",
        label: "Асуулт",
        color: [6, 182, 212],
    },
];

const CONTENTS: [SectionContent; SECTION_COUNT] = [
    SectionContent {
        title: "Олимпиадын тухай",
        description: "Манай олимпиад нь залуу авьяаслаг хүмүүсийг нэгтгэн, мэдлэг чадвараа дэлгэрүүлэх боломжийг олгоно.",
        details: &[
            "Улс хоорондын түвшний тэмцээн",
            "Жил бүр зохион байгуулагддаг",
            "1000+ оролцогч цуглуулдаг",
            "Шинэ санаа, чадвараа харуулах боломж",
        ],
    },
    SectionContent {
        title: "Шалгалт",
        description: "Шалгалтын үе шат, дүрэм журам болон үнэлгээний шалгуурын талаар мэдээлэл.",
        details: &[
            "3 үе шаттай шалгалт",
            "Тус бүр 2 цагийн хугацаатай",
            "Онлайн болон офлайн хэлбэртэй",
            "Мэргэжлийн шалгуур үзүүлэлтээр үнэлнэ",
        ],
    },
    SectionContent {
        title: "Шагналын сан",
        description: "Тэргүүн байранд шалгарсан оролцогчдод өгөх урамшууллын сан.",
        details: &[
            "1-р байр: ₮5,000,000",
            "2-р байр: ₮3,000,000",
            "3-р байр: ₮1,500,000",
            "Онцгой шагналууд болон хөтөлбөр",
        ],
    },
    SectionContent {
        title: "Ивээн тэтгэч",
        description: "Манай үйл ажиллагааг дэмжиж буй хамтрагч байгууллагууд.",
        details: &[
            "10+ үндэсний компани",
            "Олон улсын түншүүд",
            "Ажлын байрны боломж",
            "Ур чадварын хөгжлийн хөтөлбөр",
        ],
    },
    SectionContent {
        title: "Холбоо барих",
        description: "Бидэнтэй холбогдох, асуулт асуух боломжтой.",
        details: &[
            "Email: info@olympiad.mn",
            "Утас: +976 7777-7777",
            "Хаяг: Улаанбаатар хот, СБД",
            "Ажлын цаг: Да-Ба 9:00-18:00",
        ],
    },
    SectionContent {
        title: "Бүртгүүлэх",
        description: "Олимпиадад оролцохын тулд бүртгүүлэх шаардлагатай.",
        details: &[
            "Онлайн бүртгэл нээлттэй",
            "Эхлэх: 2025 оны 11-р сар",
            "Багаар болон ганцаарчилсан",
            "Иргэний үнэмлэх шаардлагатай",
        ],
    },
    SectionContent {
        title: "Түгээмэл асуулт",
        description: "Олимпиадтай холбоотой түгээмэл асуудаг асуултууд.",
        details: &[
            "Хэн оролцох боломжтой вэ?",
            "Бүртгэлийн хураамж хэд вэ?",
            "Хэдэн үе шаттай вэ?",
            "Онлайн оролцох боломжтой юу?",
        ],
    },
];

/// All section placements in navigation order.
pub fn all_placements() -> &'static [SectionPlacement] {
    &PLACEMENTS
}
