//! The static endpoint table

use super::params::*;
use super::{Endpoint, HttpMethod, ResponseBody};

const USER: &str = "microsoft.graph.user";
const GROUP: &str = "microsoft.graph.group";
const DIRECTORY_OBJECT: &str = "microsoft.graph.directoryObject";
const MESSAGE: &str = "microsoft.graph.message";
const EVENT: &str = "microsoft.graph.event";
const DRIVE_ITEM: &str = "microsoft.graph.driveItem";
const TEAM: &str = "microsoft.graph.team";
const CHANNEL: &str = "microsoft.graph.channel";
const PLANNER_TASK: &str = "microsoft.graph.plannerTask";
const TERM: &str = "microsoft.graph.termStore.term";
const TERM_SET: &str = "microsoft.graph.termStore.set";
const TERM_RELATION: &str = "microsoft.graph.termStore.relation";
const PRINT_TASK: &str = "microsoft.graph.printTask";
const PRINT_TASK_DEFINITION: &str = "microsoft.graph.printTaskDefinition";

/// Parameters of a collection read: the given ones plus every query option
macro_rules! list_params {
    ($($param:expr),* $(,)?) => {
        &[$($param,)* TOP, SKIP, SEARCH, FILTER, COUNT, ORDERBY, SELECT, EXPAND]
    };
}

/// Parameters of a single entity read: the given ones plus `$select`/`$expand`
macro_rules! get_params {
    ($($param:expr),* $(,)?) => {
        &[$($param,)* SELECT, EXPAND]
    };
}

pub static ENDPOINTS: &[Endpoint] = &[
    // Users
    Endpoint {
        alias: "listUsers",
        method: HttpMethod::Get,
        path: "/users",
        description: "Retrieve a list of user objects.",
        parameters: list_params!(CONSISTENCY_LEVEL),
        request: None,
        response: ResponseBody::Collection(USER),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "createUser",
        method: HttpMethod::Post,
        path: "/users",
        description: "Create a new user.",
        parameters: &[],
        request: Some(USER),
        response: ResponseBody::Entity(USER),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getUser",
        method: HttpMethod::Get,
        path: "/users/{user-id}",
        description: "Read properties and relationships of user object.",
        parameters: get_params!(USER_ID),
        request: None,
        response: ResponseBody::Entity(USER),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateUser",
        method: HttpMethod::Patch,
        path: "/users/{user-id}",
        description: "Update the properties of a user object.",
        parameters: &[USER_ID],
        request: Some(USER),
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deleteUser",
        method: HttpMethod::Delete,
        path: "/users/{user-id}",
        description: "Delete a user object.",
        parameters: &[USER_ID],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getMe",
        method: HttpMethod::Get,
        path: "/me",
        description: "Read properties and relationships of the signed-in user.",
        parameters: get_params!(),
        request: None,
        response: ResponseBody::Entity(USER),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listDirectReports",
        method: HttpMethod::Get,
        path: "/users/{user-id}/directReports",
        description: "The users and contacts that report to the user.",
        parameters: list_params!(USER_ID, CONSISTENCY_LEVEL),
        request: None,
        response: ResponseBody::Collection(DIRECTORY_OBJECT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getManager",
        method: HttpMethod::Get,
        path: "/users/{user-id}/manager",
        description: "Returns the user or organizational contact assigned as the user's manager.",
        parameters: get_params!(USER_ID),
        request: None,
        response: ResponseBody::Entity(DIRECTORY_OBJECT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listMemberOf",
        method: HttpMethod::Get,
        path: "/users/{user-id}/memberOf",
        description: "The groups and directory roles that the user is a member of.",
        parameters: list_params!(USER_ID, CONSISTENCY_LEVEL),
        request: None,
        response: ResponseBody::Collection(DIRECTORY_OBJECT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listJoinedTeams",
        method: HttpMethod::Get,
        path: "/users/{user-id}/joinedTeams",
        description: "Get the teams in Microsoft Teams that the user is a direct member of.",
        parameters: list_params!(USER_ID),
        request: None,
        response: ResponseBody::Collection(TEAM),
        errors: GRAPH_ERRORS,
    },
    // Groups
    Endpoint {
        alias: "listGroups",
        method: HttpMethod::Get,
        path: "/groups",
        description: "List all the groups in an organization.",
        parameters: list_params!(CONSISTENCY_LEVEL),
        request: None,
        response: ResponseBody::Collection(GROUP),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "createGroup",
        method: HttpMethod::Post,
        path: "/groups",
        description: "Create a new group.",
        parameters: &[],
        request: Some(GROUP),
        response: ResponseBody::Entity(GROUP),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getGroup",
        method: HttpMethod::Get,
        path: "/groups/{group-id}",
        description: "Get the properties and relationships of a group object.",
        parameters: get_params!(GROUP_ID),
        request: None,
        response: ResponseBody::Entity(GROUP),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateGroup",
        method: HttpMethod::Patch,
        path: "/groups/{group-id}",
        description: "Update the properties of a group object.",
        parameters: &[GROUP_ID],
        request: Some(GROUP),
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deleteGroup",
        method: HttpMethod::Delete,
        path: "/groups/{group-id}",
        description: "Delete a group.",
        parameters: &[GROUP_ID],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listGroupMembers",
        method: HttpMethod::Get,
        path: "/groups/{group-id}/members",
        description: "The direct members of this group.",
        parameters: list_params!(GROUP_ID, CONSISTENCY_LEVEL),
        request: None,
        response: ResponseBody::Collection(DIRECTORY_OBJECT),
        errors: GRAPH_ERRORS,
    },
    // Mail
    Endpoint {
        alias: "listMessages",
        method: HttpMethod::Get,
        path: "/me/messages",
        description: "Get the messages in the signed-in user's mailbox.",
        parameters: list_params!(),
        request: None,
        response: ResponseBody::Collection(MESSAGE),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "createMessage",
        method: HttpMethod::Post,
        path: "/me/messages",
        description: "Create a draft of a new message.",
        parameters: &[],
        request: Some(MESSAGE),
        response: ResponseBody::Entity(MESSAGE),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getMessage",
        method: HttpMethod::Get,
        path: "/me/messages/{message-id}",
        description: "Retrieve the properties and relationships of a message object.",
        parameters: get_params!(MESSAGE_ID),
        request: None,
        response: ResponseBody::Entity(MESSAGE),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateMessage",
        method: HttpMethod::Patch,
        path: "/me/messages/{message-id}",
        description: "Update the properties of a message object.",
        parameters: &[MESSAGE_ID],
        request: Some(MESSAGE),
        response: ResponseBody::Entity(MESSAGE),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deleteMessage",
        method: HttpMethod::Delete,
        path: "/me/messages/{message-id}",
        description: "Delete a message in the specified user's mailbox.",
        parameters: &[MESSAGE_ID],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listUserMessages",
        method: HttpMethod::Get,
        path: "/users/{user-id}/messages",
        description: "Get the messages in the user's mailbox.",
        parameters: list_params!(USER_ID),
        request: None,
        response: ResponseBody::Collection(MESSAGE),
        errors: GRAPH_ERRORS,
    },
    // Calendar
    Endpoint {
        alias: "listEvents",
        method: HttpMethod::Get,
        path: "/me/events",
        description: "Get a list of event objects in the signed-in user's mailbox.",
        parameters: list_params!(),
        request: None,
        response: ResponseBody::Collection(EVENT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "createEvent",
        method: HttpMethod::Post,
        path: "/me/events",
        description: "Create an event in the signed-in user's default calendar.",
        parameters: &[],
        request: Some(EVENT),
        response: ResponseBody::Entity(EVENT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getEvent",
        method: HttpMethod::Get,
        path: "/me/events/{event-id}",
        description: "Get the properties and relationships of the specified event object.",
        parameters: get_params!(EVENT_ID),
        request: None,
        response: ResponseBody::Entity(EVENT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateEvent",
        method: HttpMethod::Patch,
        path: "/me/events/{event-id}",
        description: "Update the properties of the event object.",
        parameters: &[EVENT_ID],
        request: Some(EVENT),
        response: ResponseBody::Entity(EVENT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deleteEvent",
        method: HttpMethod::Delete,
        path: "/me/events/{event-id}",
        description: "Remove the specified event from the containing calendar.",
        parameters: &[EVENT_ID],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listEventInstances",
        method: HttpMethod::Get,
        path: "/me/events/{event-id}/instances",
        description: "The occurrences of a recurring series within a time range.",
        parameters: list_params!(EVENT_ID, START_DATE_TIME, END_DATE_TIME),
        request: None,
        response: ResponseBody::Collection(EVENT),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listUserEvents",
        method: HttpMethod::Get,
        path: "/users/{user-id}/events",
        description: "The user's events. Default is to show events under the default calendar.",
        parameters: list_params!(USER_ID),
        request: None,
        response: ResponseBody::Collection(EVENT),
        errors: GRAPH_ERRORS,
    },
    // Files
    Endpoint {
        alias: "getDriveRoot",
        method: HttpMethod::Get,
        path: "/me/drive/root",
        description: "The root folder of the signed-in user's drive.",
        parameters: get_params!(),
        request: None,
        response: ResponseBody::Entity(DRIVE_ITEM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listDriveRootChildren",
        method: HttpMethod::Get,
        path: "/me/drive/root/children",
        description: "Return the items in the root folder of the signed-in user's drive.",
        parameters: list_params!(),
        request: None,
        response: ResponseBody::Collection(DRIVE_ITEM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getDriveItem",
        method: HttpMethod::Get,
        path: "/drives/{drive-id}/items/{driveItem-id}",
        description: "Retrieve the metadata for a driveItem in a drive by file system path or ID.",
        parameters: get_params!(DRIVE_ID, DRIVE_ITEM_ID),
        request: None,
        response: ResponseBody::Entity(DRIVE_ITEM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateDriveItem",
        method: HttpMethod::Patch,
        path: "/drives/{drive-id}/items/{driveItem-id}",
        description: "Update the metadata for a driveItem by ID or path.",
        parameters: &[DRIVE_ID, DRIVE_ITEM_ID],
        request: Some(DRIVE_ITEM),
        response: ResponseBody::Entity(DRIVE_ITEM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deleteDriveItem",
        method: HttpMethod::Delete,
        path: "/drives/{drive-id}/items/{driveItem-id}",
        description: "Delete a driveItem by using its ID or path.",
        parameters: &[DRIVE_ID, DRIVE_ITEM_ID],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listDriveItemChildren",
        method: HttpMethod::Get,
        path: "/drives/{drive-id}/items/{driveItem-id}/children",
        description: "Return a collection of driveItems in the children relationship of a driveItem.",
        parameters: list_params!(DRIVE_ID, DRIVE_ITEM_ID),
        request: None,
        response: ResponseBody::Collection(DRIVE_ITEM),
        errors: GRAPH_ERRORS,
    },
    // Teams
    Endpoint {
        alias: "getTeam",
        method: HttpMethod::Get,
        path: "/teams/{team-id}",
        description: "Retrieve the properties and relationships of the specified team.",
        parameters: get_params!(TEAM_ID),
        request: None,
        response: ResponseBody::Entity(TEAM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateTeam",
        method: HttpMethod::Patch,
        path: "/teams/{team-id}",
        description: "Update the properties of the specified team.",
        parameters: &[TEAM_ID],
        request: Some(TEAM),
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listChannels",
        method: HttpMethod::Get,
        path: "/teams/{team-id}/channels",
        description: "Retrieve the list of channels in this team.",
        parameters: list_params!(TEAM_ID),
        request: None,
        response: ResponseBody::Collection(CHANNEL),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "createChannel",
        method: HttpMethod::Post,
        path: "/teams/{team-id}/channels",
        description: "Create a new channel in a team.",
        parameters: &[TEAM_ID],
        request: Some(CHANNEL),
        response: ResponseBody::Entity(CHANNEL),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getChannel",
        method: HttpMethod::Get,
        path: "/teams/{team-id}/channels/{channel-id}",
        description: "Retrieve the properties and relationships of a channel.",
        parameters: get_params!(TEAM_ID, CHANNEL_ID),
        request: None,
        response: ResponseBody::Entity(CHANNEL),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updateChannel",
        method: HttpMethod::Patch,
        path: "/teams/{team-id}/channels/{channel-id}",
        description: "Update the properties of the specified channel.",
        parameters: &[TEAM_ID, CHANNEL_ID],
        request: Some(CHANNEL),
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deleteChannel",
        method: HttpMethod::Delete,
        path: "/teams/{team-id}/channels/{channel-id}",
        description: "Delete the channel.",
        parameters: &[TEAM_ID, CHANNEL_ID],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getPrimaryChannel",
        method: HttpMethod::Get,
        path: "/teams/{team-id}/primaryChannel",
        description: "Get the default channel, General, of a team.",
        parameters: get_params!(TEAM_ID),
        request: None,
        response: ResponseBody::Entity(CHANNEL),
        errors: GRAPH_ERRORS,
    },
    // Planner
    Endpoint {
        alias: "listPlannerTasks",
        method: HttpMethod::Get,
        path: "/me/planner/tasks",
        description: "Retrieve a list of plannertask objects assigned to the signed-in user.",
        parameters: list_params!(),
        request: None,
        response: ResponseBody::Collection(PLANNER_TASK),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "createPlannerTask",
        method: HttpMethod::Post,
        path: "/planner/tasks",
        description: "Create a new plannerTask.",
        parameters: &[],
        request: Some(PLANNER_TASK),
        response: ResponseBody::Entity(PLANNER_TASK),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getPlannerTask",
        method: HttpMethod::Get,
        path: "/planner/tasks/{plannerTask-id}",
        description: "Retrieve the properties and relationships of plannerTask object.",
        parameters: get_params!(PLANNER_TASK_ID),
        request: None,
        response: ResponseBody::Entity(PLANNER_TASK),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "updatePlannerTask",
        method: HttpMethod::Patch,
        path: "/planner/tasks/{plannerTask-id}",
        description: "Update the properties of plannerTask object.",
        parameters: &[PLANNER_TASK_ID, IF_MATCH],
        request: Some(PLANNER_TASK),
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "deletePlannerTask",
        method: HttpMethod::Delete,
        path: "/planner/tasks/{plannerTask-id}",
        description: "Delete a plannerTask object.",
        parameters: &[PLANNER_TASK_ID, IF_MATCH],
        request: None,
        response: ResponseBody::Empty,
        errors: GRAPH_ERRORS,
    },
    // Term store
    Endpoint {
        alias: "getTermStoreSet",
        method: HttpMethod::Get,
        path: "/sites/{site-id}/termStore/sets/{set-id}",
        description: "Read the properties and relationships of a set object.",
        parameters: get_params!(SITE_ID, SET_ID),
        request: None,
        response: ResponseBody::Entity(TERM_SET),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listTermStoreSetChildren",
        method: HttpMethod::Get,
        path: "/sites/{site-id}/termStore/sets/{set-id}/children",
        description: "Get the first level children of a set.",
        parameters: list_params!(SITE_ID, SET_ID),
        request: None,
        response: ResponseBody::Collection(TERM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getTerm",
        method: HttpMethod::Get,
        path: "/sites/{site-id}/termStore/sets/{set-id}/terms/{term-id}",
        description: "Read the properties and relationships of a term object.",
        parameters: get_params!(SITE_ID, SET_ID, TERM_ID),
        request: None,
        response: ResponseBody::Entity(TERM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listTermChildren",
        method: HttpMethod::Get,
        path: "/sites/{site-id}/termStore/sets/{set-id}/terms/{term-id}/children",
        description: "Children of current term.",
        parameters: list_params!(SITE_ID, SET_ID, TERM_ID),
        request: None,
        response: ResponseBody::Collection(TERM),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listTermRelations",
        method: HttpMethod::Get,
        path: "/sites/{site-id}/termStore/sets/{set-id}/terms/{term-id}/relations",
        description: "To indicate which terms are related to the current term as either pinned or reused.",
        parameters: list_params!(SITE_ID, SET_ID, TERM_ID),
        request: None,
        response: ResponseBody::Collection(TERM_RELATION),
        errors: GRAPH_ERRORS,
    },
    // Print
    Endpoint {
        alias: "listPrintTaskDefinitions",
        method: HttpMethod::Get,
        path: "/print/taskDefinitions",
        description: "Retrieve a list of task definitions that the requesting app defined in the tenant.",
        parameters: list_params!(),
        request: None,
        response: ResponseBody::Collection(PRINT_TASK_DEFINITION),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getPrintTaskDefinition",
        method: HttpMethod::Get,
        path: "/print/taskDefinitions/{printTaskDefinition-id}",
        description: "Get details about a task definition.",
        parameters: get_params!(PRINT_TASK_DEFINITION_ID),
        request: None,
        response: ResponseBody::Entity(PRINT_TASK_DEFINITION),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "listPrintTasks",
        method: HttpMethod::Get,
        path: "/print/taskDefinitions/{printTaskDefinition-id}/tasks",
        description: "A list of tasks that have been created based on this definition.",
        parameters: list_params!(PRINT_TASK_DEFINITION_ID),
        request: None,
        response: ResponseBody::Collection(PRINT_TASK),
        errors: GRAPH_ERRORS,
    },
    Endpoint {
        alias: "getPrintTask",
        method: HttpMethod::Get,
        path: "/print/taskDefinitions/{printTaskDefinition-id}/tasks/{printTask-id}",
        description: "Read the properties and relationships of a printTask object.",
        parameters: get_params!(PRINT_TASK_DEFINITION_ID, PRINT_TASK_ID),
        request: None,
        response: ResponseBody::Entity(PRINT_TASK),
        errors: GRAPH_ERRORS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints::ParameterLocation;
    use std::collections::HashSet;

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in ENDPOINTS {
            assert!(seen.insert(endpoint.alias), "duplicate alias {}", endpoint.alias);
        }
    }

    #[test]
    fn test_path_parameters_match_placeholders() {
        for endpoint in ENDPOINTS {
            let declared: Vec<&str> = endpoint
                .parameters_in(ParameterLocation::Path)
                .map(|p| p.name)
                .collect();
            assert_eq!(declared, endpoint.placeholders(), "endpoint {}", endpoint.alias);
        }
    }

    #[test]
    fn test_writes_declare_a_body() {
        for endpoint in ENDPOINTS {
            match endpoint.method {
                HttpMethod::Post | HttpMethod::Patch | HttpMethod::Put => {
                    assert!(endpoint.request.is_some(), "endpoint {}", endpoint.alias)
                }
                HttpMethod::Get | HttpMethod::Delete => {
                    assert!(endpoint.request.is_none(), "endpoint {}", endpoint.alias)
                }
            }
        }
    }

    #[test]
    fn test_routes_are_unambiguous() {
        for endpoint in ENDPOINTS {
            let concrete = endpoint.path.replace('{', "x").replace('}', "");
            let found = crate::api::endpoints::find_by_route(endpoint.method, &concrete).unwrap();
            assert_eq!(found.alias, endpoint.alias);
        }
    }
}
