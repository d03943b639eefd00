//! Status codes emitted into `status.h`.

/// One `status_code` enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusValue {
    pub name: String,
    pub value: i32,
    /// Foreign error value mapped onto this code (`std::errc::...` or `VkResult::...`).
    pub mapped: Option<String>,
    pub description: String,
}

/// A titled group of status codes.
#[derive(Debug, Clone)]
pub struct StatusGroup {
    pub title: &'static str,
    pub values: Vec<StatusValue>,
}

const GENERAL: &[(&str, &str)] = &[
    ("undefined_error", "undefined error"),
    ("invalid_param", "invalid parameter in method call"),
    ("not_initialized", "the system is not initialized"),
    (
        "already_initialized",
        "the system or class is already initialized or in a specific state",
    ),
    ("cant_allocate", "cant allocate memory"),
    ("cant_open", "cant open file or handle"),
    ("cant_read", "cant read from file or handle"),
    ("corrupted", "a file, data or object is corrupted"),
    (
        "invalid",
        "invalid file, wrong file format, or failed validation",
    ),
    ("cant_write", "cant write to file or handle"),
    ("not_found", "one or multiple objects are missing or not found"),
    ("not_ready", "one or multiple objects are not ready, or out of sync"),
    ("cant_access", "access is not allowed"),
    ("already_exists", "a file or item already exists"),
];

/// `std::errc` enumerators, in code order from -1001.
const STL_ERRC: &[&str] = &[
    "address_family_not_supported",
    "address_in_use",
    "address_not_available",
    "already_connected",
    "argument_list_too_long",
    "argument_out_of_domain",
    "bad_address",
    "bad_file_descriptor",
    "bad_message",
    "broken_pipe",
    "connection_aborted",
    "connection_already_in_progress",
    "connection_refused",
    "connection_reset",
    "cross_device_link",
    "destination_address_required",
    "device_or_resource_busy",
    "directory_not_empty",
    "executable_format_error",
    "file_exists",
    "file_too_large",
    "filename_too_long",
    "function_not_supported",
    "host_unreachable",
    "identifier_removed",
    "illegal_byte_sequence",
    "inappropriate_io_control_operation",
    "interrupted",
    "invalid_argument",
    "invalid_seek",
    "io_error",
    "is_a_directory",
    "message_size",
    "network_down",
    "network_reset",
    "network_unreachable",
    "no_buffer_space",
    "no_child_process",
    "no_link",
    "no_lock_available",
    "no_message_available",
    "no_message",
    "no_protocol_option",
    "no_space_on_device",
    "no_stream_resources",
    "no_such_device_or_address",
    "no_such_device",
    "no_such_file_or_directory",
    "no_such_process",
    "not_a_directory",
    "not_a_socket",
    "not_a_stream",
    "not_connected",
    "not_enough_memory",
    "not_supported",
    "operation_canceled",
    "operation_in_progress",
    "operation_not_permitted",
    "operation_not_supported",
    "operation_would_block",
    "owner_dead",
    "permission_denied",
    "protocol_error",
    "protocol_not_supported",
    "read_only_file_system",
    "resource_deadlock_would_occur",
    "resource_unavailable_try_again",
    "result_out_of_range",
    "state_not_recoverable",
    "stream_timeout",
    "text_file_busy",
    "timed_out",
    "too_many_files_open_in_system",
    "too_many_files_open",
    "too_many_links",
    "too_many_symbolic_link_levels",
    "value_too_large",
    "wrong_protocol_type",
];

/// `VkResult` error names without the `VK_ERROR_` prefix, in code order from -2001.
const VULKAN: &[&str] = &[
    "OUT_OF_HOST_MEMORY",
    "OUT_OF_DEVICE_MEMORY",
    "INITIALIZATION_FAILED",
    "DEVICE_LOST",
    "MEMORY_MAP_FAILED",
    "LAYER_NOT_PRESENT",
    "EXTENSION_NOT_PRESENT",
    "FEATURE_NOT_PRESENT",
    "INCOMPATIBLE_DRIVER",
    "TOO_MANY_OBJECTS",
    "FORMAT_NOT_SUPPORTED",
    "FRAGMENTED_POOL",
    "UNKNOWN",
    "OUT_OF_POOL_MEMORY",
    "INVALID_EXTERNAL_HANDLE",
    "FRAGMENTATION",
    "INVALID_OPAQUE_CAPTURE_ADDRESS",
    "SURFACE_LOST_KHR",
    "NATIVE_WINDOW_IN_USE_KHR",
    "OUT_OF_DATE_KHR",
    "INCOMPATIBLE_DISPLAY_KHR",
    "VALIDATION_FAILED_EXT",
    "INVALID_SHADER_NV",
    "INVALID_DRM_FORMAT_MODIFIER_PLANE_LAYOUT_EXT",
    "NOT_PERMITTED_KHR",
    "FULL_SCREEN_EXCLUSIVE_MODE_LOST_EXT",
    "COMPRESSION_EXHAUSTED_EXT",
];

fn value(name: impl Into<String>, value: i32, description: impl Into<String>) -> StatusValue {
    StatusValue {
        name: name.into(),
        value,
        mapped: None,
        description: description.into(),
    }
}

/// All status groups, in enum order.
pub fn status_groups() -> Vec<StatusGroup> {
    let ok = StatusGroup {
        title: "no error, success",
        values: vec![value("ok", 0, "ok, no error, successful")],
    };

    let general = StatusGroup {
        title: "general errors",
        values: GENERAL
            .iter()
            .zip(0..)
            .map(|((name, description), i)| value(*name, -100 - i, *description))
            .collect(),
    };

    let mut stl = vec![value(
        "stl_unrecognized_error_code",
        -1000,
        "unknown/unrecognized STL error, which could not be mapped to a specific error value",
    )];
    stl.extend(STL_ERRC.iter().zip(0..).map(|(errc, i)| StatusValue {
        mapped: Some(format!("std::errc::{errc}")),
        ..value(
            format!("stl_{errc}"),
            -1001 - i,
            format!("stl error code: errc::{errc}"),
        )
    }));

    let mut vulkan = vec![value(
        "vulkan_unrecognized_error_code",
        -2000,
        "unknown/unrecognized Vulkan error, which could not be mapped to a specific error value",
    )];
    vulkan.extend(VULKAN.iter().zip(0..).map(|(error, i)| {
        let vk = format!("VkResult::VK_ERROR_{error}");
        StatusValue {
            description: format!("Vulkan error code {vk}"),
            mapped: Some(vk),
            ..value(
                format!("vulkan_{}", error.to_ascii_lowercase()),
                -2001 - i,
                "",
            )
        }
    }));

    vec![
        ok,
        general,
        StatusGroup {
            title: "stl portable errors (from errc)",
            values: stl,
        },
        StatusGroup {
            title: "Vulkan errors",
            values: vulkan,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn find<'a>(groups: &'a [StatusGroup], name: &str) -> &'a StatusValue {
        groups
            .iter()
            .flat_map(|g| &g.values)
            .find(|v| v.name == name)
            .unwrap()
    }

    #[test]
    fn test_group_ranges() {
        let groups = status_groups();
        let ranges: Vec<(i32, i32)> = groups
            .iter()
            .map(|g| {
                let first = g.values.first().unwrap().value;
                let last = g.values.last().unwrap().value;
                (first, last)
            })
            .collect();
        assert_eq!(
            ranges,
            vec![(0, 0), (-100, -113), (-1000, -1078), (-2000, -2027)]
        );
    }

    #[test]
    fn test_names_and_values_unique() {
        let groups = status_groups();
        let all: Vec<&StatusValue> = groups.iter().flat_map(|g| &g.values).collect();
        let names: HashSet<&str> = all.iter().map(|v| v.name.as_str()).collect();
        let values: HashSet<i32> = all.iter().map(|v| v.value).collect();
        assert_eq!(names.len(), all.len());
        assert_eq!(values.len(), all.len());
    }

    #[test]
    fn test_mappings() {
        let groups = status_groups();
        let errc = find(&groups, "stl_wrong_protocol_type");
        assert_eq!(errc.value, -1078);
        assert_eq!(errc.mapped.as_deref(), Some("std::errc::wrong_protocol_type"));

        let vk = find(&groups, "vulkan_invalid_drm_format_modifier_plane_layout_ext");
        assert_eq!(vk.value, -2024);
        assert_eq!(
            vk.mapped.as_deref(),
            Some("VkResult::VK_ERROR_INVALID_DRM_FORMAT_MODIFIER_PLANE_LAYOUT_EXT")
        );
        assert_eq!(
            vk.description,
            "Vulkan error code VkResult::VK_ERROR_INVALID_DRM_FORMAT_MODIFIER_PLANE_LAYOUT_EXT"
        );

        assert!(find(&groups, "vulkan_unrecognized_error_code").mapped.is_none());
        assert_eq!(find(&groups, "already_exists").value, -113);
    }
}
