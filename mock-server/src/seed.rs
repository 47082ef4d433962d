//! Content the stub backend starts with, in the backend's wire shape.
//!
//! Deliberately not identical to the site's bundled fallback, so tests can
//! tell remote content from fallback content.

use std::collections::BTreeMap;

use crate::{GalleryImage, Hours, MenuCategory, MenuItem, RestaurantInfo, Review};

const WEEK: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub fn restaurant() -> RestaurantInfo {
    let hours: BTreeMap<String, Hours> = WEEK
        .iter()
        .map(|day| {
            let close = if *day == "sunday" { "22:00" } else { "23:00" };
            (
                day.to_string(),
                Hours {
                    open: "09:00".to_string(),
                    close: close.to_string(),
                },
            )
        })
        .collect();

    RestaurantInfo {
        name: "Majestea".to_string(),
        slogan: "Le brunch & café cosy où chaque moment devient délicieux".to_string(),
        address: "123 Bd Paul Vaillant Couturier, 95190 Goussainville".to_string(),
        phone: "01 39 91 43 93".to_string(),
        email: "contact@majestea.fr".to_string(),
        instagram: "@majestea_restaurant".to_string(),
        google_rating: 4.8,
        total_reviews: "2,3k".to_string(),
        hours,
        features: vec![
            "Terrasse disponible".to_string(),
            "WiFi gratuit".to_string(),
            "Parking à proximité".to_string(),
            "Brunch le week-end".to_string(),
        ],
    }
}

fn category(id: &str, name: &str, items: &[(&str, &str, f64, &str)]) -> MenuCategory {
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
                category_id: id.to_string(),
            })
            .collect(),
    }
}

pub fn menu() -> Vec<MenuCategory> {
    vec![
        category(
            "mains",
            "Plats Principaux",
            &[
                (
                    "1",
                    "Majestea Burger Poulet",
                    19.0,
                    "Burger de poulet croustillant, sauce maison",
                ),
                ("2", "Saumon du Chef", 24.5, "Saumon rôti, légumes de saison, sauce citronnée"),
                ("3", "Filet de Bœuf", 29.0, "Filet de bœuf premium, sauce au poivre"),
            ],
        ),
        category(
            "starters",
            "Entrées",
            &[
                ("4", "Burrata Pesto", 13.0, "Burrata crémeuse, pesto basilic"),
                ("5", "Potato Balls", 11.5, "Boulettes de pommes de terre, dip maison"),
            ],
        ),
        category(
            "desserts",
            "Desserts & Douceurs",
            &[("6", "Tiramisu Pistache", 12.8, "Tiramisu revisité à la pistache")],
        ),
    ]
}

fn review(id: &str, name: &str, rating: u8, date: &str, comment: &str) -> Review {
    Review {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        date: date.to_string(),
        comment: comment.to_string(),
        avatar: crate::avatar_for(name),
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(
            "r1",
            "Sophie L.",
            5,
            "Il y a 2 jours",
            "Un endroit magnifique, le brunch est délicieux.",
        ),
        review("r2", "Nadia K.", 5, "Il y a 5 jours", "Service adorable, terrasse superbe."),
        review(
            "r3",
            "Camille R.",
            4,
            "Il y a 2 semaines",
            "Plats copieux, un peu d'attente le week-end.",
        ),
    ]
}

fn image(id: &str, src: &str, alt: &str, category: &str) -> GalleryImage {
    GalleryImage {
        id: id.to_string(),
        src: src.to_string(),
        alt: alt.to_string(),
        category: category.to_string(),
    }
}

pub fn gallery() -> Vec<GalleryImage> {
    vec![
        image("g1", "https://images.example.com/brunch.jpg", "Brunch gourmand", "brunch"),
        image("g2", "https://images.example.com/desserts.jpg", "Desserts élégants", "desserts"),
        image("g3", "https://images.example.com/plats.jpg", "Plats gourmands", "plats"),
        image("g4", "https://images.example.com/terrasse.jpg", "Terrasse ensoleillée", "terrasse"),
    ]
}
