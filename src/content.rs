//! Static page content. Everything here is compiled in; the page never
//! creates or mutates any of it at runtime.

pub const BRAND_NAME: &str = "TerraNova";
pub const BRAND_TAGLINE: &str =
    "Exploring the beauty and innovation of mineral materials with a deep respect for our planet.";

/// Shown when a showcase item has no usable image path.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct TopicCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct InfoCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ShowcaseItem {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

impl ShowcaseItem {
    /// Falls back to [`PLACEHOLDER_IMAGE`] when the asset path is unresolved.
    pub fn image_or_placeholder(&self) -> &'static str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: [&'static str; 5],
}

/// Section ids the page renders, in document order. Nav anchors point here.
pub const SECTION_IDS: [&str; 5] = [
    "about",
    "education",
    "innovation",
    "sustainability",
    "showcase",
];

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "About", anchor: "#about" },
    NavItem { label: "Education", anchor: "#education" },
    NavItem { label: "Innovation", anchor: "#innovation" },
    NavItem { label: "Sustainability", anchor: "#sustainability" },
    NavItem { label: "Showcase", anchor: "#showcase" },
];

pub const EDUCATION_TOPICS: [TopicCard; 3] = [
    TopicCard {
        icon: "layers",
        title: "Mineral Formation",
        description: "Learn about the geological processes that create the Earth's diverse mineral deposits over millions of years.",
    },
    TopicCard {
        icon: "compass",
        title: "Exploration Techniques",
        description: "Discover the methods geologists use to locate and identify valuable mineral resources around the world.",
    },
    TopicCard {
        icon: "gem",
        title: "Crystal Structures",
        description: "Explore the fascinating geometric patterns that form the building blocks of all mineral specimens.",
    },
];

pub const INNOVATION_ITEMS: [InfoCard; 3] = [
    InfoCard {
        title: "Precision Extraction",
        description: "Using AI and robotics to minimize environmental impact while maximizing resource recovery.",
    },
    InfoCard {
        title: "Material Science Breakthroughs",
        description: "Developing new applications for mineral materials in technology, medicine, and sustainable energy.",
    },
    InfoCard {
        title: "Digital Mapping",
        description: "Creating detailed 3D models of underground deposits to improve planning and reduce exploration costs.",
    },
];

pub const SUSTAINABILITY_PILLARS: [TopicCard; 3] = [
    TopicCard {
        icon: "globe",
        title: "Environmental Stewardship",
        description: "Minimizing our ecological footprint through careful planning and restoration.",
    },
    TopicCard {
        icon: "droplets",
        title: "Water Conservation",
        description: "Implementing closed-loop water systems to reduce consumption and prevent contamination.",
    },
    TopicCard {
        icon: "mountain",
        title: "Land Reclamation",
        description: "Restoring mining sites to their natural state or transforming them into new ecological habitats.",
    },
];

pub const SHOWCASE_ITEMS: [ShowcaseItem; 6] = [
    ShowcaseItem {
        image: "/images/minerals/amethyst.jpg",
        title: "Amethyst Geode",
        description: "A stunning purple crystal formation from the volcanic regions of Brazil.",
        price: "$1,250",
    },
    ShowcaseItem {
        image: "/images/minerals/malachite.jpg",
        title: "Malachite Specimen",
        description: "Vibrant green banded mineral with a silky luster from the Congo.",
        price: "$890",
    },
    ShowcaseItem {
        image: "/images/minerals/labradorite.png",
        title: "Labradorite Slab",
        description: "Iridescent feldspar with a remarkable play of colors from Madagascar.",
        price: "$1,450",
    },
    ShowcaseItem {
        image: "/images/minerals/pyrite.png",
        title: "Pyrite Cluster",
        description: "Metallic gold-colored crystal formation known as 'Fool's Gold'.",
        price: "$750",
    },
    ShowcaseItem {
        image: "/images/minerals/fluorite.jpg",
        title: "Fluorite Octahedron",
        description: "Geometric purple and green crystal with perfect octahedral structure.",
        price: "$980",
    },
    ShowcaseItem {
        image: "/images/minerals/rhodochrosite.jpg",
        title: "Rhodochrosite Slice",
        description: "Pink banded mineral with concentric patterns from Argentina.",
        price: "$1,200",
    },
];

pub const SOCIAL_PLATFORMS: [&str; 4] = ["Instagram", "Facebook", "Twitter", "YouTube"];

pub const CONTACT_ADDRESS: &str = "123 Crystal Way, Mineral City, MC 12345";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_EMAIL: &str = "info@terranova-minerals.com";

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Quick Links",
        links: ["About Us", "Our Collection", "Education", "Innovation", "Sustainability"],
    },
    FooterColumn {
        title: "Resources",
        links: ["Blog", "Research Papers", "Mineral Database", "Events", "Press Kit"],
    },
    FooterColumn {
        title: "Legal",
        links: ["Privacy Policy", "Terms of Service", "Shipping Policy", "Returns & Refunds", "Cookie Policy"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_match_section_ids_in_order() {
        assert_eq!(NAV_ITEMS.len(), SECTION_IDS.len());
        for (item, id) in NAV_ITEMS.iter().zip(SECTION_IDS.iter()) {
            assert_eq!(item.anchor, format!("#{id}"));
        }
    }

    #[test]
    fn showcase_has_exactly_six_entries_with_fixed_prices() {
        assert_eq!(SHOWCASE_ITEMS.len(), 6);
        let prices: Vec<&str> = SHOWCASE_ITEMS.iter().map(|i| i.price).collect();
        assert_eq!(prices, ["$1,250", "$890", "$1,450", "$750", "$980", "$1,200"]);
    }

    #[test]
    fn showcase_entries_are_fully_populated() {
        for item in &SHOWCASE_ITEMS {
            assert!(!item.title.is_empty());
            assert!(!item.description.is_empty());
            assert!(item.price.starts_with('$'));
        }
    }

    #[test]
    fn card_lists_have_the_documented_counts() {
        assert_eq!(EDUCATION_TOPICS.len(), 3);
        assert_eq!(INNOVATION_ITEMS.len(), 3);
        assert_eq!(SUSTAINABILITY_PILLARS.len(), 3);
        assert_eq!(SOCIAL_PLATFORMS.len(), 4);
        assert_eq!(FOOTER_COLUMNS.len(), 3);
        for column in &FOOTER_COLUMNS {
            assert_eq!(column.links.len(), 5);
        }
    }

    #[test]
    fn unresolved_showcase_image_degrades_to_placeholder() {
        let item = ShowcaseItem {
            image: "",
            title: "Unphotographed Specimen",
            description: "No asset yet.",
            price: "$1",
        };
        assert_eq!(item.image_or_placeholder(), PLACEHOLDER_IMAGE);
        assert_eq!(
            SHOWCASE_ITEMS[0].image_or_placeholder(),
            SHOWCASE_ITEMS[0].image
        );
    }
}
