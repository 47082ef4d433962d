//! Submission handlers behind the reservation and review forms.
//!
//! Both validate locally first, so an incomplete form never reaches the
//! network, and then collapse the API outcome into a `Notice` the page can
//! show as a toast.

use majestea_core::{NewReview, ReservationRequest, Review, ValidationError};
use tracing::info;

use crate::api::SiteApi;
use crate::transport::Transport;

/// Shown whenever the backend could not be reached or answered with an error.
pub const GENERIC_FAILURE: &str =
    "Une erreur est survenue. Veuillez réessayer ou nous appeler directement.";

pub const REVIEW_THANKS: &str = "Merci pour votre avis !";

/// User-facing result of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Accepted by the backend; `message` is what the server said.
    Sent { message: String },
    /// Caught locally; nothing was sent.
    Rejected(ValidationError),
    /// Sent, but not accepted.
    Failed { message: String },
}

impl Notice {
    pub fn is_sent(&self) -> bool {
        matches!(self, Notice::Sent { .. })
    }
}

pub async fn submit_reservation<T: Transport>(
    api: &SiteApi<T>,
    request: &ReservationRequest,
) -> Notice {
    if let Err(err) = request.validate() {
        return Notice::Rejected(err);
    }
    match api.create_reservation(request).await {
        Ok(confirmation) if confirmation.success => {
            info!(
                date = %request.date,
                time = %request.time,
                guests = %request.guests,
                "reservation sent"
            );
            Notice::Sent {
                message: confirmation.message,
            }
        }
        Ok(confirmation) => Notice::Failed {
            message: confirmation.message,
        },
        Err(_) => Notice::Failed {
            message: GENERIC_FAILURE.to_string(),
        },
    }
}

/// Posts a review; on success also hands back the stored review so the page
/// can show it without waiting for the next refresh.
pub async fn submit_review<T: Transport>(
    api: &SiteApi<T>,
    review: &NewReview,
) -> (Notice, Option<Review>) {
    if let Err(err) = review.validate() {
        return (Notice::Rejected(err), None);
    }
    match api.submit_review(review).await {
        Ok(stored) => (
            Notice::Sent {
                message: REVIEW_THANKS.to_string(),
            },
            Some(stored),
        ),
        Err(_) => (
            Notice::Failed {
                message: GENERIC_FAILURE.to_string(),
            },
            None,
        ),
    }
}
