use std::path::{Path, PathBuf};

use ctlegen_codegen::builder::FormattedOutput;
use ctlegen_core::{GeneratedFile, Result};

use super::CppFile;
use crate::{
    CppContext,
    catalog::status::{StatusGroup, status_groups},
};

/// `status.h`: the `status_code` enum, the `status` wrapper class and its
/// name, description and foreign error mappings.
pub struct StatusH<'a> {
    ctx: &'a CppContext,
    groups: Vec<StatusGroup>,
}

impl<'a> StatusH<'a> {
    pub const FILE_NAME: &'static str = "status.h";

    pub fn new(ctx: &'a CppContext) -> Self {
        Self {
            ctx,
            groups: status_groups(),
        }
    }

    fn write_enum(&self, out: &mut FormattedOutput) {
        out.line("enum class status_code : int");
        let mut body = out.terminated_block();
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                body.blank();
            }
            body.comment(group.title);
            for v in &group.values {
                body.line(&format!(
                    "{:<52}= {}, // {}",
                    v.name, v.value, v.description
                ));
            }
        }
    }

    fn write_class(&self, out: &mut FormattedOutput) {
        out.comment("status maps a number of error values into one error enum and has ctors which converts these error values into a status_code value");
        out.line("class status");
        let mut body = out.terminated_block();
        body.line_adjusted("public:", -1);
        for group in &self.groups {
            body.comment(group.title);
            for v in &group.values {
                body.line(&format!(
                    "static const status {:<53} // {}",
                    format!("{};", v.name),
                    v.description
                ));
            }
            body.blank();
        }
        body.line_adjusted("private:", -1);
        body.line("status_code svalue = status_code::ok;");
        body.blank();
        body.line_adjusted("public:", -1);
        body.snippet(CLASS_INTERFACE);
    }

    fn write_implementation(&self, out: &mut FormattedOutput) {
        out.raw_line("#ifdef CTLE_IMPLEMENTATION");
        out.blank();

        for group in &self.groups {
            out.comment(group.title);
            for v in &group.values {
                out.line(&format!(
                    "const status status::{name} = status_code::{name};",
                    name = v.name
                ));
            }
            out.blank();
        }

        out.snippet(DESCRIPTION_STRUCT);
        out.line("static const std::unordered_map<status_code, status_code_string_description> status_code_string_descriptions =");
        {
            let mut table = out.terminated_block();
            for (i, group) in self.groups.iter().enumerate() {
                if i > 0 {
                    table.blank();
                }
                table.comment(group.title);
                for v in &group.values {
                    table.block_line(
                        &format!(
                            "status_code::{name}, {{ \"{name}\", \"{desc}\" }}",
                            name = v.name,
                            desc = v.description
                        ),
                        true,
                    );
                }
            }
        }
        out.blank();
        out.snippet(NAME_AND_DESCRIPTION);
        out.blank();

        self.write_mapping(out, "_SYSTEM_ERROR_", "std::errc", "errc_to_status_code_mapping", 2);
        out.blank();
        self.write_mapping(out, "VULKAN_CORE_H_", "VkResult", "vkresult_to_status_code_mapping", 3);
        out.blank();
        out.raw_line("#endif//CTLE_IMPLEMENTATION");
    }

    /// Lookup table from a foreign error type, plus `status::to_status_code`.
    fn write_mapping(
        &self,
        out: &mut FormattedOutput,
        define: &str,
        foreign: &str,
        table: &str,
        group: usize,
    ) {
        let Some(group) = self.groups.get(group) else {
            return;
        };
        out.raw_line(&format!("#ifdef {define}"));
        out.line(&format!(
            "static const std::unordered_map<{foreign}, status_code> {table} ="
        ));
        {
            let mut entries = out.terminated_block();
            for v in &group.values {
                if let Some(mapped) = &v.mapped {
                    entries.block_line(&format!("{mapped}, status_code::{}", v.name), true);
                }
            }
        }
        out.blank();
        out.line(&format!(
            "status_code status::to_status_code( {foreign} value ) noexcept"
        ));
        {
            let mut body = out.block();
            if foreign == "VkResult" {
                body.line("if( value >= VK_SUCCESS )");
                body.begin_tab(None).line("return status_code::ok;").end_tab();
            }
            body.line(&format!("auto it = {table}.find( value );"));
            body.line(&format!("if( it == {table}.end() )"));
            body.begin_tab(None);
            body.line(&format!(
                "return status_code::{};",
                group.values.first().map_or("undefined_error", |v| v.name.as_str())
            ));
            body.end_tab();
            body.line("return it->second;");
        }
        out.raw_line(&format!("#endif//{define}"));
    }
}

impl CppFile for StatusH<'_> {
    fn relative_path(&self) -> String {
        self.ctx.include_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for StatusH<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        {
            let mut header = self.ctx.header(&mut out, Self::FILE_NAME);
            header.line("#include <string>");
            header.line("#include <iostream>");
            header.line("#include <unordered_map>");
            header.blank();
            {
                let mut ns = header.namespace("ctle");
                self.write_enum(&mut ns);
                ns.blank();
                self.write_class(&mut ns);
                ns.blank();
                self.write_implementation(&mut ns);
                ns.blank();
                ns.snippet(STATUS_ERROR);
            }
            header.blank();
            header.comment("stream operator for writing a status to a stream");
            header.snippet(STREAM_OPERATOR);
        }
        Ok(out.to_text())
    }
}

const CLASS_INTERFACE: &str = r#"
status() = default;
status( const status &other ) = default;

status( const status_code &_value ) noexcept : svalue( _value ) {}
const status &operator = ( const status_code &_value ) noexcept { this->svalue = _value; return *this; }

#ifdef _SYSTEM_ERROR_
// convert from STL std::errc
static status_code to_status_code( std::errc _value ) noexcept;
status( const std::errc &_value ) noexcept : svalue( to_status_code(_value) ) {}
const status &operator = ( const std::errc &_value ) noexcept { this->svalue = to_status_code(_value); return *this; }
#endif//_SYSTEM_ERROR_

#ifdef VULKAN_CORE_H_
// convert from Vulkan error: VkResult
static status_code to_status_code( VkResult _value ) noexcept;
status( const VkResult &_value ) noexcept : svalue( to_status_code(_value) ) {}
const status &operator = ( const VkResult &_value ) noexcept { this->svalue = to_status_code(_value); return *this; }
#endif//VULKAN_CORE_H_

// use as a bool
operator bool() const { return svalue >= status_code::ok; }
bool operator !() const { return svalue < status_code::ok; }

// compare to status_code
bool operator == ( const status_code &_value ) const noexcept { return this->svalue == _value; }
bool operator != ( const status_code &_value ) const noexcept { return this->svalue != _value; }

// get the status_code value
status_code value() const { return svalue; }

// get the name of the status code as a string
std::string name() const;

// get a description of the status code value
std::string description() const;
"#;

const DESCRIPTION_STRUCT: &str = r#"
struct status_code_string_description
{
	const char *name;
	const char *description;
};

"#;

const NAME_AND_DESCRIPTION: &str = r#"
// get the name of the status code as a string
std::string status::name() const
{
	auto it = status_code_string_descriptions.find( this->svalue );
	if( it == status_code_string_descriptions.end() )
	{
		return "";
	}
	return it->second.name;
}

// get a description of the status code value
std::string status::description() const
{
	auto it = status_code_string_descriptions.find( this->svalue );
	if( it == status_code_string_descriptions.end() )
	{
		return "";
	}
	return it->second.description;
}
"#;

const STATUS_ERROR: &str = r#"
class status_error : public std::runtime_error
{
public:
	status value;
	explicit status_error( status _value, char const* const _Message = "" ) noexcept : std::runtime_error(_Message), value(_value) {}
};
"#;

const STREAM_OPERATOR: &str = r#"
inline std::ostream &operator<<( std::ostream &os, const ctle::status &_status )
{
	os << _status.name() << std::string(" (\"") << _status.description() << std::string("\")");
	return os;
}
"#;
