//! Parameters shared across the endpoint table

use super::{ErrorResponse, Parameter, ParameterKind, ParameterLocation};
use crate::schema::EdmType;

const fn query(name: &'static str, kind: ParameterKind, description: &'static str) -> Parameter {
    Parameter {
        name,
        location: ParameterLocation::Query,
        kind,
        required: false,
        description,
    }
}

/// Required path segment identifying a resource
pub const fn path(name: &'static str, description: &'static str) -> Parameter {
    Parameter {
        name,
        location: ParameterLocation::Path,
        kind: ParameterKind::String,
        required: true,
        description,
    }
}

pub const SELECT: Parameter = query("$select", ParameterKind::CsvList, "Select properties to be returned");
pub const EXPAND: Parameter = query("$expand", ParameterKind::CsvList, "Expand related entities");
pub const FILTER: Parameter = query("$filter", ParameterKind::String, "Filter items by property values");
pub const ORDERBY: Parameter = query("$orderby", ParameterKind::CsvList, "Order items by property values");
pub const SEARCH: Parameter = query("$search", ParameterKind::String, "Search items by search phrases");
pub const TOP: Parameter = query("$top", ParameterKind::Integer { min: 0 }, "Show only the first n items");
pub const SKIP: Parameter = query("$skip", ParameterKind::Integer { min: 0 }, "Skip the first n items");
pub const COUNT: Parameter = query("$count", ParameterKind::Boolean, "Include count of items");

pub const CONSISTENCY_LEVEL: Parameter = Parameter {
    name: "ConsistencyLevel",
    location: ParameterLocation::Header,
    kind: ParameterKind::OneOf(&["eventual"]),
    required: false,
    description: "Indicates the requested consistency level. Required for advanced queries on directory objects.",
};

pub const IF_MATCH: Parameter = Parameter {
    name: "If-Match",
    location: ParameterLocation::Header,
    kind: ParameterKind::String,
    required: true,
    description: "ETag of the resource being changed",
};

pub const START_DATE_TIME: Parameter = Parameter {
    name: "startDateTime",
    location: ParameterLocation::Query,
    kind: ParameterKind::Edm(EdmType::DateTimeOffset),
    required: true,
    description: "The start date and time of the time range",
};

pub const END_DATE_TIME: Parameter = Parameter {
    name: "endDateTime",
    location: ParameterLocation::Query,
    kind: ParameterKind::Edm(EdmType::DateTimeOffset),
    required: true,
    description: "The end date and time of the time range",
};

pub const USER_ID: Parameter = path("user-id", "The unique identifier of user");
pub const GROUP_ID: Parameter = path("group-id", "The unique identifier of group");
pub const MESSAGE_ID: Parameter = path("message-id", "The unique identifier of message");
pub const EVENT_ID: Parameter = path("event-id", "The unique identifier of event");
pub const DRIVE_ID: Parameter = path("drive-id", "The unique identifier of drive");
pub const DRIVE_ITEM_ID: Parameter = path("driveItem-id", "The unique identifier of driveItem");
pub const TEAM_ID: Parameter = path("team-id", "The unique identifier of team");
pub const CHANNEL_ID: Parameter = path("channel-id", "The unique identifier of channel");
pub const PLANNER_TASK_ID: Parameter = path("plannerTask-id", "The unique identifier of plannerTask");
pub const SITE_ID: Parameter = path("site-id", "The unique identifier of site");
pub const SET_ID: Parameter = path("set-id", "The unique identifier of set");
pub const TERM_ID: Parameter = path("term-id", "The unique identifier of term");
pub const PRINT_TASK_DEFINITION_ID: Parameter =
    path("printTaskDefinition-id", "The unique identifier of printTaskDefinition");
pub const PRINT_TASK_ID: Parameter = path("printTask-id", "The unique identifier of printTask");

/// Every Graph operation declares the same two error classes
pub const GRAPH_ERRORS: &[ErrorResponse] = &[
    ErrorResponse {
        status: "4XX",
        description: "Client error, body is an OData error",
    },
    ErrorResponse {
        status: "5XX",
        description: "Server error, body is an OData error",
    },
];

/// Names of the OData system query options
pub const SYSTEM_QUERY_OPTIONS: [&str; 8] = [
    "$select", "$expand", "$filter", "$orderby", "$search", "$top", "$skip", "$count",
];
