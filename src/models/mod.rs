//! Typed Microsoft Graph models
//!
//! Every property is optional. Nullable properties are `Option<Option<T>>`
//! so an explicit `null` is kept apart from an absent property; properties
//! declared non-nullable reject `null`. Timestamps keep the text the service
//! sent and unknown properties are kept in `additional_data`, so a payload
//! survives a deserialize/serialize round trip. Inherited properties are
//! repeated on each concrete type.

#[macro_use]
mod macros;

pub mod calendar;
pub mod common;
pub mod fields;
pub mod files;
pub mod mail;
pub mod planner;
pub mod print;
pub mod teams;
pub mod term_store;
pub mod users;

pub use calendar::{Attendee, Event, EventType, FreeBusyStatus, Location, OnlineMeetingInfo, ResponseStatus};
pub use common::{BodyType, DateTimeTimeZone, EmailAddress, IdentitySet, Importance, ItemBody, Recipient};
pub use fields::{NullableProperty, Timestamp};
pub use files::{DriveItem, ItemReference};
pub use mail::{FollowupFlag, Message};
pub use planner::PlannerTask;
pub use print::{PrintTask, PrintTaskDefinition, PrintTaskTrigger};
pub use teams::{Channel, ChannelMembershipType, Team, TeamVisibilityType};
pub use users::{DirectoryObject, Group, User};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Links a model to its qualified name in the schema registry
pub trait GraphType: Serialize + DeserializeOwned {
    const TYPE_NAME: &'static str;
}

macro_rules! graph_types {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(impl GraphType for $ty {
            const TYPE_NAME: &'static str = $name;
        })+
    };
}

graph_types! {
    User => "microsoft.graph.user",
    Group => "microsoft.graph.group",
    DirectoryObject => "microsoft.graph.directoryObject",
    DriveItem => "microsoft.graph.driveItem",
    Message => "microsoft.graph.message",
    Event => "microsoft.graph.event",
    Team => "microsoft.graph.team",
    Channel => "microsoft.graph.channel",
    PlannerTask => "microsoft.graph.plannerTask",
    PrintTask => "microsoft.graph.printTask",
    PrintTaskDefinition => "microsoft.graph.printTaskDefinition",
    PrintTaskTrigger => "microsoft.graph.printTaskTrigger",
    term_store::Term => "microsoft.graph.termStore.term",
    term_store::Set => "microsoft.graph.termStore.set",
    term_store::Relation => "microsoft.graph.termStore.relation",
}
