//! Bundled default content shown before, or instead of, remote content.

use crate::types::{
    GalleryImage, MenuCategory, MenuItem, OpeningHours, RestaurantProfile, Review, Weekday,
    WeeklyHours,
};

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1707643733189-d2e4c472e32c?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHwxfHxicnVuY2glMjByZXN0YXVyYW50fGVufDB8fHx8MTc2ODA1NDk5M3ww&ixlib=rb-4.1.0&q=85&w=1600";

pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1596910715979-6a1ef3bb0731?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwxfHxjYWZlJTIwdGVycmFjZXxlbnwwfHx8fDE3NjgwNTUwMDJ8MA&ixlib=rb-4.1.0&q=85&w=800";

pub fn restaurant_profile() -> RestaurantProfile {
    RestaurantProfile {
        name: "Majestea".to_string(),
        slogan: "Le brunch & café cosy où chaque moment devient délicieux".to_string(),
        address: "123 Bd Paul Vaillant Couturier, 95190 Goussainville".to_string(),
        phone: "01 39 91 43 93".to_string(),
        email: "contact@majestea.fr".to_string(),
        instagram: "@majestea_restaurant".to_string(),
        google_rating: 4.7,
        total_reviews: "2,1k".to_string(),
        hours: weekly_hours(),
        features: vec![
            "Terrasse disponible".to_string(),
            "WiFi gratuit".to_string(),
            "Parking à proximité".to_string(),
        ],
    }
}

fn weekly_hours() -> WeeklyHours {
    Weekday::ALL
        .iter()
        .map(|day| {
            let close = if *day == Weekday::Sunday { "22:00" } else { "23:00" };
            (
                *day,
                OpeningHours {
                    open: "09:00".to_string(),
                    close: close.to_string(),
                },
            )
        })
        .collect()
}

fn category(id: &str, name: &str, items: &[(u32, &str, f64, &str)]) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        items: items
            .iter()
            .map(|(item_id, item_name, price, description)| MenuItem {
                id: item_id.to_string(),
                name: item_name.to_string(),
                price: *price,
                description: description.to_string(),
                category_id: None,
            })
            .collect(),
    }
}

pub fn menu_categories() -> Vec<MenuCategory> {
    vec![
        category(
            "mains",
            "Plats Principaux",
            &[
                (
                    1,
                    "Majestea Burger Poulet",
                    19.0,
                    "Burger de poulet croustillant, sauce maison, légumes frais",
                ),
                (
                    2,
                    "Majestea Burger Bœuf",
                    22.5,
                    "Burger de bœuf premium, cheddar affiné, oignons caramélisés",
                ),
                (
                    3,
                    "Linguine Sea Food",
                    21.0,
                    "Linguine aux fruits de mer, sauce crémeuse à l'ail",
                ),
                (
                    4,
                    "Escalope Façon Saltimboca",
                    19.5,
                    "Escalope de veau, jambon de parme, sauge fraîche",
                ),
                (
                    5,
                    "Chicken Alfredo",
                    18.0,
                    "Poulet grillé, pâtes fraîches, sauce alfredo crémeuse",
                ),
                (6, "Saumon du Chef", 24.5, "Saumon rôti, légumes de saison, sauce citronnée"),
                (
                    7,
                    "Filet de Bœuf",
                    29.0,
                    "Filet de bœuf premium, sauce au poivre, pommes grenaille",
                ),
            ],
        ),
        category(
            "starters",
            "Entrées",
            &[
                (8, "Duo de Tacos", 13.0, "Deux tacos gourmands au choix du chef"),
                (
                    9,
                    "Tartare de Saumon Exotique",
                    13.0,
                    "Saumon frais, mangue, avocat, sauce passion",
                ),
                (10, "Burrata Pesto", 13.0, "Burrata crémeuse, pesto basilic, tomates confites"),
                (
                    11,
                    "Potato Balls",
                    11.5,
                    "Boulettes de pommes de terre croustillantes, dip maison",
                ),
                (12, "Crevettes Frites", 11.5, "Crevettes panées croustillantes, sauce cocktail"),
            ],
        ),
        category(
            "salads",
            "Salades",
            &[
                (
                    13,
                    "Salade César",
                    19.5,
                    "Laitue romaine, poulet grillé, parmesan, croûtons, sauce césar",
                ),
                (
                    14,
                    "Salade Crousty Chèvre Miel",
                    19.5,
                    "Mesclun, chèvre chaud, miel, noix, vinaigrette balsamique",
                ),
            ],
        ),
        category(
            "desserts",
            "Desserts & Douceurs",
            &[
                (
                    15,
                    "Cœur Coulant Caramel Beurre Salé",
                    12.8,
                    "Fondant au chocolat, cœur coulant caramel",
                ),
                (
                    16,
                    "Brioche façon Pain Perdu",
                    17.0,
                    "Brioche dorée, fruits frais, chantilly maison",
                ),
                (17, "Tiramisu Pistache", 12.8, "Tiramisu revisité à la pistache, crumble"),
            ],
        ),
    ]
}

fn review(id: u32, name: &str, rating: u8, date: &str, comment: &str) -> Review {
    Review {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        date: date.to_string(),
        comment: comment.to_string(),
        avatar: name.chars().next().map(String::from).unwrap_or_default(),
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(
            1,
            "Sophie L.",
            5,
            "Il y a 2 jours",
            "Un endroit magnifique ! L'ambiance est chaleureuse et féminine, le brunch est délicieux. Je recommande vivement le tiramisu pistache !",
        ),
        review(
            2,
            "Marie D.",
            5,
            "Il y a 1 semaine",
            "La meilleure adresse brunch de Goussainville. La terrasse est superbe et le service impeccable. Le burger poulet est incroyable !",
        ),
        review(
            3,
            "Camille R.",
            4,
            "Il y a 2 semaines",
            "Cadre très joli et féminin, parfait pour un moment entre amies. Les plats sont copieux et savoureux. Un peu d'attente le week-end.",
        ),
        review(
            4,
            "Emma B.",
            5,
            "Il y a 3 semaines",
            "J'adore cet endroit ! L'équipe est adorable et les desserts sont à tomber. Le cœur coulant caramel est mon préféré.",
        ),
        review(
            5,
            "Julie M.",
            5,
            "Il y a 1 mois",
            "Un brunch parfait dans un cadre cosy. Le saumon du chef est exceptionnel. Je reviendrai avec plaisir !",
        ),
    ]
}

fn image(id: u32, src: &str, alt: &str, category: &str) -> GalleryImage {
    GalleryImage {
        id: id.to_string(),
        src: src.to_string(),
        alt: alt.to_string(),
        category: category.to_string(),
    }
}

pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        image(
            1,
            "https://images.unsplash.com/photo-1707643733189-d2e4c472e32c?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHwxfHxicnVuY2glMjByZXN0YXVyYW50fGVufDB8fHx8MTc2ODA1NDk5M3ww&ixlib=rb-4.1.0&q=85&w=800",
            "Brunch gourmand",
            "brunch",
        ),
        image(
            2,
            "https://images.unsplash.com/photo-1667118399331-c6d546acee11?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHwyfHxicnVuY2glMjByZXN0YXVyYW50fGVufDB8fHx8MTc2ODA1NDk5M3ww&ixlib=rb-4.1.0&q=85&w=800",
            "Desserts élégants",
            "desserts",
        ),
        image(
            3,
            "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NjZ8MHwxfHNlYXJjaHwzfHxnb3VybWV0JTIwZm9vZHxlbnwwfHx8fDE3NjgwNTQ5OTd8MA&ixlib=rb-4.1.0&q=85&w=800",
            "Fine dining",
            "plats",
        ),
        image(
            4,
            "https://images.unsplash.com/photo-1628838463043-b81a343794d6?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NjZ8MHwxfHNlYXJjaHw0fHxnb3VybWV0JTIwZm9vZHxlbnwwfHx8fDE3NjgwNTQ5OTd8MA&ixlib=rb-4.1.0&q=85&w=800",
            "Plats gourmands",
            "plats",
        ),
        image(
            5,
            "https://images.pexels.com/photos/248413/pexels-photo-248413.jpeg?w=800",
            "Vin et fromages",
            "ambiance",
        ),
        image(
            6,
            "https://images.unsplash.com/photo-1596910715979-6a1ef3bb0731?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzB8MHwxfHNlYXJjaHwxfHxjYWZlJTIwdGVycmFjZXxlbnwwfHx8fDE3NjgwNTUwMDJ8MA&ixlib=rb-4.1.0&q=85&w=800",
            "Terrasse ensoleillée",
            "terrasse",
        ),
    ]
}
