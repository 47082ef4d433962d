//! Process-wide content state with static fallback.
//!
//! # Design
//! `DataProvider` is a cheap cloneable handle over shared state, created once
//! at start-up and handed to whatever serves the content. Every collection
//! starts at its bundled fallback value. A load pass fans out one task per
//! resource and joins on all of them; each task writes its own result the
//! moment it arrives, so a slow resource never holds back the others, and a
//! failed one simply leaves the previous value in place.
//!
//! Overlapping passes are not serialized: if two refreshes race, whichever
//! response lands last wins.

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use majestea_core::{fallback, GalleryImage, MenuCategory, RestaurantProfile, Review};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::SiteApi;
use crate::transport::Transport;

/// One of the independently fetched content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Restaurant,
    Menu,
    Reviews,
    Gallery,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Restaurant,
        Resource::Menu,
        Resource::Reviews,
        Resource::Gallery,
    ];

    /// The restaurant profile is not part of a refresh.
    pub const REFRESHABLE: [Resource; 3] = [Resource::Menu, Resource::Reviews, Resource::Gallery];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Restaurant => "restaurant info",
            Resource::Menu => "menu",
            Resource::Reviews => "reviews",
            Resource::Gallery => "gallery",
        })
    }
}

/// Read-only copy of everything the provider exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub restaurant_info: RestaurantProfile,
    pub menu_categories: Vec<MenuCategory>,
    pub reviews: Vec<Review>,
    pub gallery_images: Vec<GalleryImage>,
    pub hero_image: &'static str,
    pub about_image: &'static str,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
struct ContentState {
    restaurant: RestaurantProfile,
    menu: Vec<MenuCategory>,
    reviews: Vec<Review>,
    gallery: Vec<GalleryImage>,
    loading: bool,
    error: Option<String>,
}

impl ContentState {
    fn seeded() -> Self {
        Self {
            restaurant: fallback::restaurant_profile(),
            menu: fallback::menu_categories(),
            reviews: fallback::reviews(),
            gallery: fallback::gallery_images(),
            loading: true,
            error: None,
        }
    }
}

enum Update {
    Restaurant(RestaurantProfile),
    Menu(Vec<MenuCategory>),
    Reviews(Vec<Review>),
    Gallery(Vec<GalleryImage>),
}

struct Inner<T> {
    api: SiteApi<T>,
    state: RwLock<ContentState>,
}

pub struct DataProvider<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for DataProvider<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport + 'static> DataProvider<T> {
    /// Seed every collection with fallback content. `loading` stays true
    /// until the first `init` pass completes.
    pub fn new(api: SiteApi<T>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                state: RwLock::new(ContentState::seeded()),
            }),
        }
    }

    pub fn api(&self) -> &SiteApi<T> {
        &self.inner.api
    }

    /// First load: clears the error, then fetches all four resources.
    pub async fn init(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.loading = true;
            state.error = None;
        }
        info!("loading site content");
        self.load(&Resource::ALL).await;
    }

    /// Re-fetch menu, reviews and gallery. The profile and any recorded
    /// error are left as they are.
    pub async fn refresh(&self) {
        self.inner.state.write().await.loading = true;
        debug!("refreshing site content");
        self.load(&Resource::REFRESHABLE).await;
    }

    async fn load(&self, resources: &[Resource]) {
        let handles: Vec<_> = resources
            .iter()
            .map(|resource| tokio::spawn(load_one(Arc::clone(&self.inner), *resource)))
            .collect();

        let outcomes = join_all(handles).await;

        let mut state = self.inner.state.write().await;
        for (resource, outcome) in resources.iter().zip(outcomes) {
            if let Err(err) = outcome {
                warn!(%resource, %err, "load task aborted");
                state.error = Some(format!("{resource}: {err}"));
            }
        }
        state.loading = false;
    }

    pub async fn snapshot(&self) -> ContentSnapshot {
        let state = self.inner.state.read().await;
        ContentSnapshot {
            restaurant_info: state.restaurant.clone(),
            menu_categories: state.menu.clone(),
            reviews: state.reviews.clone(),
            gallery_images: state.gallery.clone(),
            hero_image: fallback::HERO_IMAGE,
            about_image: fallback::ABOUT_IMAGE,
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    pub async fn restaurant(&self) -> RestaurantProfile {
        self.inner.state.read().await.restaurant.clone()
    }

    pub async fn menu(&self) -> Vec<MenuCategory> {
        self.inner.state.read().await.menu.clone()
    }

    pub async fn reviews(&self) -> Vec<Review> {
        self.inner.state.read().await.reviews.clone()
    }

    pub async fn gallery(&self) -> Vec<GalleryImage> {
        self.inner.state.read().await.gallery.clone()
    }

    pub fn hero_image(&self) -> &'static str {
        fallback::HERO_IMAGE
    }

    pub fn about_image(&self) -> &'static str {
        fallback::ABOUT_IMAGE
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.state.read().await.loading
    }

    /// Message of the most recent failed fetch since the last `init`.
    pub async fn error(&self) -> Option<String> {
        self.inner.state.read().await.error.clone()
    }
}

async fn load_one<T: Transport>(inner: Arc<Inner<T>>, resource: Resource) {
    let api = &inner.api;
    let outcome = match resource {
        Resource::Restaurant => api
            .fetch_restaurant_profile()
            .await
            .map(|remote| Update::Restaurant(remote.into())),
        Resource::Menu => api.fetch_menu().await.map(Update::Menu),
        Resource::Reviews => api.fetch_reviews().await.map(Update::Reviews),
        Resource::Gallery => api.fetch_gallery().await.map(Update::Gallery),
    };

    let mut state = inner.state.write().await;
    match outcome {
        Ok(Update::Restaurant(profile)) => state.restaurant = profile,
        Ok(Update::Menu(menu)) => state.menu = menu,
        Ok(Update::Reviews(reviews)) => state.reviews = reviews,
        Ok(Update::Gallery(gallery)) => state.gallery = gallery,
        Err(err) => {
            warn!(%resource, %err, "keeping previous content");
            state.error = Some(format!("{resource}: {err}"));
        }
    }
}
