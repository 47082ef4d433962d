//! Data-model invariants and form-field checks.
//!
//! Payload checks run inside the `parse_*` methods so a response that decodes
//! but breaks an invariant is treated exactly like a malformed one. The form
//! checks (`ReservationRequest::validate`, `NewReview::validate`) are for the
//! submitting caller; the client itself never calls them before a request.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{
    GalleryImage, MenuCategory, NewReview, RemoteRestaurantProfile, ReservationRequest, Review,
    Weekday,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),

    #[error("menu item {item} has a negative price ({price})")]
    NegativePrice { item: String, price: f64 },

    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("opening hours missing for {0:?}")]
    MissingWeekday(Weekday),
}

impl ReservationRequest {
    /// Check the fields a reservation cannot be sent without.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("phone", &self.phone)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("guests", &self.guests)
    }
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("comment", &self.comment)?;
        check_rating(self.rating)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn check_rating(rating: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}

fn check_unique<'a>(
    collection: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_profile(profile: &RemoteRestaurantProfile) -> Result<(), ValidationError> {
    // Unknown keys already fail to decode, so seven present keys means an exact week.
    match Weekday::ALL.iter().find(|day| !profile.hours.contains_key(day)) {
        Some(day) => Err(ValidationError::MissingWeekday(*day)),
        None => Ok(()),
    }
}

pub(crate) fn check_category(category: &MenuCategory) -> Result<(), ValidationError> {
    check_unique("menu items", category.items.iter().map(|item| item.id.as_str()))?;
    for item in &category.items {
        if item.price < 0.0 {
            return Err(ValidationError::NegativePrice {
                item: item.id.clone(),
                price: item.price,
            });
        }
    }
    Ok(())
}

pub(crate) fn check_menu(menu: &[MenuCategory]) -> Result<(), ValidationError> {
    check_unique("menu categories", menu.iter().map(|c| c.id.as_str()))?;
    menu.iter().try_for_each(check_category)
}

pub(crate) fn check_review(review: &Review) -> Result<(), ValidationError> {
    check_rating(review.rating)
}

pub(crate) fn check_reviews(reviews: &[Review]) -> Result<(), ValidationError> {
    check_unique("reviews", reviews.iter().map(|r| r.id.as_str()))?;
    reviews.iter().try_for_each(check_review)
}

pub(crate) fn check_gallery(images: &[GalleryImage]) -> Result<(), ValidationError> {
    check_unique("gallery", images.iter().map(|i| i.id.as_str()))
}
