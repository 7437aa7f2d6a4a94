pub mod booking_repository;
pub mod material_repository;
pub mod models;
pub mod note_repository;
pub mod review_repository;
pub mod session_repository;
pub mod user_repository;

use bson::doc;
use mongodb::{options::IndexOptions, Client, Collection, IndexModel};

use self::models::{Booking, Note, Review, StudyMaterial, StudySession, User};

// Collection names are inherited from the original deployment and must not
// change while pre-existing data is live.
const USERS: &str = "users";
const SESSIONS: &str = "StudyHub";
const BOOKINGS: &str = "bookedSession";
const REVIEWS: &str = "reviews";
const NOTES: &str = "notes";
const MATERIALS: &str = "studyMaterials";

/// Shared persistence handle. The driver pools connections internally, so
/// one `Database` is cloned into the application state and reused by every
/// request.
#[derive(Clone)]
pub struct Database {
    pub(crate) users: Collection<User>,
    pub(crate) sessions: Collection<StudySession>,
    pub(crate) bookings: Collection<Booking>,
    pub(crate) reviews: Collection<Review>,
    pub(crate) notes: Collection<Note>,
    pub(crate) materials: Collection<StudyMaterial>,
}

impl Database {
    pub async fn connect(uri: &str, database_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database_name);

        Ok(Self {
            users: db.collection(USERS),
            sessions: db.collection(SESSIONS),
            bookings: db.collection(BOOKINGS),
            reviews: db.collection(REVIEWS),
            notes: db.collection(NOTES),
            materials: db.collection(MATERIALS),
        })
    }

    /// Create the unique compound index that backs the one-booking-per-
    /// (student, session) invariant. The insert path maps the resulting
    /// duplicate-key error to the 400 "already booked" condition.
    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "studentEmail": 1, "studySessionId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.bookings.create_index(index).await?;
        Ok(())
    }
}
