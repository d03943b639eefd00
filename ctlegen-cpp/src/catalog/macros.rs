//! Convenience macros emitted into `_macros.inl`, and undefined again by
//! `_undef_macros.inl`.

/// Marker defined while the macros are in effect.
pub const INCLUDED_MARKER: &str = "_CTLE_MACROS_INCLUDED";

/// Comment shared by both macro files, after the license header.
pub const USAGE: &str = r#"
//
// _macros.inl & _undef_macros.inl are used to define convenience macros
// for implementation files.
//
// usage: include _macros.inl in implementation, *after* any other header file, so
// as to not pollute any of those files with the macros defined.
//
// If you *really* need to include in a header file (not recommended), include the
// _undef_macros.inl after the macros are used in the same file. This undefines/removes the
// macros from the rest of files used, and does not pollute the other parts of compilation.
//
// The _macros.inl and _undef_macros.inl can be safely included multiple times,
// but pair each inclusion of _macros.inl with an inclusion of _undef_macros.inl,
// before the next inclusion of _macros.inl
//
"#;

/// A single macro: its name and full definition text.
#[derive(Debug, Clone, Copy)]
pub struct Macro {
    pub name: &'static str,
    pub definition: &'static str,
}

/// Macros introduced by a shared comment.
#[derive(Debug, Clone, Copy)]
pub struct MacroGroup {
    pub comments: &'static [&'static str],
    pub macros: &'static [Macro],
    /// Blank line after the group in `_macros.inl`.
    pub spaced: bool,
}

const fn def(name: &'static str, definition: &'static str) -> Macro {
    Macro { name, definition }
}

pub const GROUPS: &[MacroGroup] = &[
    MacroGroup {
        comments: &["General function signature macro"],
        macros: &[def(
            "_CTLE_FUNCTION_SIGNATURE",
            r#"
#if defined(_MSC_VER)
#define _CTLE_FUNCTION_SIGNATURE __FUNCSIG__
#elif defined(__GNUC__)
#define _CTLE_FUNCTION_SIGNATURE __PRETTY_FUNCTION__
#endif
"#,
        )],
        spaced: false,
    },
    MacroGroup {
        comments: &[
            "_CTLE_STRINGIZE converts a number macro (like __LINE__) into a string.",
            "The _CTLE_STRINGIZE_DETAIL is needed because of how macros work in the preprocessor",
            "E.g. use _CTLE_STRINGIZE(__LINE__) to use __LINE__ as a string macro",
            "(i.e. convert any number or value to a string: 1 -> \"1\" )",
        ],
        macros: &[
            def("_CTLE_STRINGIZE_DETAIL", "#define _CTLE_STRINGIZE_DETAIL(x) #x"),
            def(
                "_CTLE_STRINGIZE",
                "#define _CTLE_STRINGIZE(x) _CTLE_STRINGIZE_DETAIL(x)",
            ),
        ],
        spaced: true,
    },
    MacroGroup {
        comments: &["Logging macros for the log.h ctle type"],
        macros: &[
            def(
                "ctLogLevel",
                r#"
#define ctLogLevel( msg_level )\
	if( ctle::log_level::msg_level <= ctle::get_global_log_level() ) {\
		ctle::log_msg _ctle_log_entry(ctle::log_level::msg_level,__FILE__,__LINE__,_CTLE_FUNCTION_SIGNATURE); _ctle_log_entry.message()
"#,
            ),
            def("ctLogError", "#define ctLogError ctLogLevel( error )"),
            def("ctLogWarning", "#define ctLogWarning ctLogLevel( warning )"),
            def("ctLogInfo", "#define ctLogInfo ctLogLevel( info )"),
            def("ctLogDebug", "#define ctLogDebug ctLogLevel( debug )"),
            def("ctLogVerbose", "#define ctLogVerbose ctLogLevel( verbose )"),
            def("ctLogEnd", r#"#define ctLogEnd ""; }"#),
        ],
        spaced: true,
    },
    MacroGroup {
        comments: &["Logs the current this pointer to the log, for tracing"],
        macros: &[def(
            "ctLogThis",
            "#define ctLogThis ctLogInfo << this << ctLogEnd;",
        )],
        spaced: true,
    },
    MacroGroup {
        comments: &[
            "Checks an expression, and logs an error and returns if the statement is not true",
        ],
        macros: &[
            def(
                "ctValidate",
                "#define ctValidate( statement , error_code_on_error ) if( !(statement) ) { const ctle::status _ctle_error_code = error_code_on_error; ctLogError",
            ),
            def(
                "ctValidateEnd",
                "#define ctValidateEnd ctLogEnd; return _ctle_error_code; }",
            ),
        ],
        spaced: true,
    },
    MacroGroup {
        comments: &[
            "In debug mode, checks expressions which are assumed to be true. if not, throws a runtime error",
        ],
        macros: &[def(
            "ctSanityCheck",
            r#"
#ifndef NDEBUG
#define ctSanityCheck( statement )\
	if( !(statement) ) {\
		ctLogError << "SanityCheck failed: " << std::string(#statement) << ctLogEnd;\
		const std::string err_val = std::string("SanityCheck " #statement " failed in " __FILE__ " line " _CTLE_STRINGIZE(__LINE__) " function ") + _CTLE_FUNCTION_SIGNATURE;\
		throw std::runtime_error( err_val );\
	}
#else
#define ctSanityCheck( statement )
#endif
"#,
        )],
        spaced: true,
    },
    MacroGroup {
        comments: &[
            "Calls a function which returns a ctle::status value, checks the value and reports/returns the value if it is an error, along with a log output",
        ],
        macros: &[def(
            "ctStatusCall",
            r#"
#define ctStatusCall( s ) \
	{\
		ctle::status _ctle_call_status = (s); \
		if( !_ctle_call_status ) {\
			ctLogError << "Call: " << #s << " failed, returned status_code: " << _ctle_call_status << ctLogEnd;\
			return _ctle_call_status;\
		}\
	}
"#,
        )],
        spaced: true,
    },
    MacroGroup {
        comments: &[
            "Calls a function which returns a ctle::status_return value, checks the status and reports/returns the status part if it is an error, along with a log output.",
            "If the call succeeds, the retval variable will receive the value part of the return value.",
            "Note that the receiving variable must exist before the call. To create the value, use ctStatusAutoReturnCall, below.",
        ],
        macros: &[def(
            "ctStatusReturnCall",
            r#"
#define ctStatusReturnCall( retval , scall ) \
	{\
		auto _ctle_call_statuspair = (scall); \
		if( !_ctle_call_statuspair.status() ) {\
			ctLogError << "Call: " << #scall << " failed, returned status_code: " << _ctle_call_statuspair.status() << ctLogEnd;\
			return _ctle_call_statuspair.status();\
		}\
		retval = std::move(_ctle_call_statuspair.value());\
	}
"#,
        )],
        spaced: true,
    },
    MacroGroup {
        comments: &[
            "Same as ctStatusReturnCall, above, but first creates the return value before the call, made the same type as the value_type of the status_return return value.",
            "Note that the receiving variable must NOT exist before the call. To use an existing value, use ctStatusReturnCall, above.",
        ],
        macros: &[def(
            "ctStatusAutoReturnCall",
            r#"
#define ctStatusAutoReturnCall( retval , scall )\
	decltype( scall )::value_type retval; ctStatusReturnCall( retval, scall )
"#,
        )],
        spaced: true,
    },
    MacroGroup {
        comments: &[
            "Calls a function which returns a ctle::status value, checks the value and throws a status_error exception if the value if it is an error, along with a log output",
        ],
        macros: &[def(
            "ctStatusCallThrow",
            r#"
#define ctStatusCallThrow( s ) \
	{\
		ctle::status _ctle_call_status = (s); \
		if( !_ctle_call_status ) {\
			ctLogError << "Call: " << #s << " failed, returned status_code: " << _ctle_call_status << ", throwing a status_error exception" << ctLogEnd;\
			throw ctle::status_error( _ctle_call_status );\
		}\
	}
"#,
        )],
        spaced: false,
    },
];

/// Every macro, in definition order.
pub fn all_macros() -> impl Iterator<Item = &'static Macro> {
    GROUPS.iter().flat_map(|group| group.macros)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_definition_defines_its_name() {
        for m in all_macros() {
            assert!(
                m.definition.contains(&format!("#define {}", m.name)),
                "{} is not defined by its own text",
                m.name
            );
        }
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<&str> = all_macros().map(|m| m.name).collect();
        assert_eq!(names.len(), all_macros().count());
        assert_eq!(names.len(), 18);
    }
}
