use std::path::{Path, PathBuf};

use ctlegen_codegen::builder::FormattedOutput;
use ctlegen_core::{GeneratedFile, Result};

use super::CppFile;
use crate::{
    CppContext,
    catalog::types::{FORWARD_DECLARATIONS, INT_BITS, Kind, Scalar, forward_declaration},
};

/// `types.h`: scalar short-hands, forward declarations of the library
/// classes, and scalar string conversions.
pub struct TypesH<'a> {
    ctx: &'a CppContext,
}

impl<'a> TypesH<'a> {
    pub const FILE_NAME: &'static str = "types.h";

    pub fn new(ctx: &'a CppContext) -> Self {
        Self { ctx }
    }
}

fn write_declarations(out: &mut FormattedOutput) {
    out.comment("Standard integer and real values short-hand");
    for bits in INT_BITS {
        out.line(&format!("using i{bits} = std::int{bits}_t;"));
        out.line(&format!("using u{bits} = std::uint{bits}_t;"));
    }
    out.line("using f32 = float;");
    out.line("using f64 = double;");
    out.blank();

    for (header, declarations) in FORWARD_DECLARATIONS {
        out.comment(&format!("from {header}"));
        for decl in *declarations {
            out.line(&forward_declaration(decl));
        }
        out.blank();
    }

    out.comment("a span of characters, with start and end pointers");
    out.line("template<class _Ty> struct string_span;");
}

/// `from_string` pair for an integer scalar, parsed through its 64-bit
/// counterpart and range checked.
fn write_int_from_string(out: &mut FormattedOutput, scalar: Scalar) {
    let ty = scalar.name();
    let (wide, parse) = match scalar.kind {
        Kind::Unsigned => ("u64", "stoull"),
        _ => ("i64", "stoll"),
    };
    let narrow = scalar.bits != 64;
    let result_param = if narrow { "result" } else { "" };

    out.line(&format!(
        "template<> {ty} from_string( const string_span<char> &str, bool &{result_param} ) noexcept"
    ));
    {
        let mut body = out.block();
        body.line(&format!(
            "{wide} val = std::{parse}( std::string( str.start, str.end ) );"
        ));
        if narrow {
            let lower = if scalar.kind == Kind::Signed {
                format!("val < ({wide})std::numeric_limits<{ty}>::min() || ")
            } else {
                String::new()
            };
            body.line(&format!(
                "if( {lower}val > ({wide})std::numeric_limits<{ty}>::max() ) {{ result = false; return {{}}; }}"
            ));
        }
        body.line(&format!("return ({ty})val;"));
    }

    out.line(&format!(
        "template<> {ty} from_string( const string_span<char> &str )"
    ));
    let mut body = out.block();
    body.line("bool result = true;");
    body.line(&format!("auto val = from_string<{ty}>( str, result );"));
    if narrow {
        body.line(&format!(
            "if( !result ) {{ throw std::out_of_range(\"In ctle::from_string(): the value is out of range for the destination type ({ty}).\"); }}"
        ));
    }
    body.line("return val;");
}

fn write_real_from_string(out: &mut FormattedOutput, scalar: Scalar) {
    let ty = scalar.name();
    let parse = if scalar.bits == 64 { "stod" } else { "stof" };
    for signature in [
        format!("template<> {ty} from_string( const string_span<char> &str, bool & ) noexcept"),
        format!("template<> {ty} from_string( const string_span<char> &str )"),
    ] {
        out.line(&signature);
        let mut body = out.block();
        body.line(&format!(
            "return std::{parse}( std::string( str.start, str.end ) );"
        ));
    }
}

fn write_implementation(out: &mut FormattedOutput) {
    out.comment("Print types to strings.");
    let scalars = Scalar::all();
    for scalar in &scalars {
        out.line(&format!(
            "template<> std::string to_string( const {} &val ) {{ return std::to_string(val); }}",
            scalar.name()
        ));
    }
    out.blank();

    for (i, scalar) in scalars.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        match scalar.kind {
            Kind::Real => write_real_from_string(out, *scalar),
            _ => write_int_from_string(out, *scalar),
        }
    }
}

impl CppFile for TypesH<'_> {
    fn relative_path(&self) -> String {
        self.ctx.include_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for TypesH<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        {
            let mut header = self.ctx.header(&mut out, Self::FILE_NAME);
            header.line("#include <cinttypes>");
            header.blank();
            write_declarations(&mut header.namespace("ctle"));
            header.blank();

            header.raw_line("#ifdef CTLE_IMPLEMENTATION");
            header.blank();
            header.line("#include \"string_funcs.h\"");
            header.blank();
            write_implementation(&mut header.namespace("ctle"));
            header.blank();
            header.raw_line("#endif//CTLE_IMPLEMENTATION");
        }
        Ok(out.to_text())
    }
}
