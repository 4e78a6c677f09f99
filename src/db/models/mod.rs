//! Entity Models
//!
//! One canonical struct per catalog entity, shared by every storage
//! backend, plus its `Create` input and all-optional `Update` patch.
//! All wire and storage field names are camelCase.

pub mod category;
pub mod client;
pub mod content;
pub mod enquiry;
pub mod gallery_item;
pub mod product;
pub mod service;
pub mod testimonial;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use client::{Client, ClientCreate, ClientUpdate};
pub use content::{merge_page_content, PageKey};
pub use enquiry::{Enquiry, EnquiryCreate, EnquiryStatus, EnquiryType, EnquiryUpdate};
pub use gallery_item::{GalleryItem, GalleryItemCreate, GalleryItemUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use service::{Service, ServiceCreate, ServiceUpdate};
pub use testimonial::{Testimonial, TestimonialCreate, TestimonialUpdate};

/// Generate a fresh entity id. Assigned exactly once at creation.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
