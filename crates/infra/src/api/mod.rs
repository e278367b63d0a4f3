//! Remote scheduling service adapter

pub mod client;
pub mod dto;

pub use client::RemoteSchedulingClient;
pub use dto::{ItemDraftDto, ItemPatchDto, ScheduledItemDto};
