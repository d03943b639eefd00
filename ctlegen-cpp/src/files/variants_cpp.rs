use std::path::{Path, PathBuf};

use ctlegen_codegen::builder::FormattedOutput;
use ctlegen_core::{GeneratedFile, Result};

use super::CppFile;
use crate::{
    CppContext,
    catalog::types::{TypeEntry, all_types},
};

/// `unit_tests_variants.cpp`: one `variant` subclass per catalogued type,
/// used by the stream round-trip unit tests.
pub struct VariantsCpp<'a> {
    ctx: &'a CppContext,
    types: Vec<TypeEntry>,
}

impl<'a> VariantsCpp<'a> {
    pub const FILE_NAME: &'static str = "unit_tests_variants.cpp";

    /// Headers under the include directory the variants depend on.
    const INCLUDES: [&'static str; 7] = [
        "status.h",
        "ntup.h",
        "hasher.h",
        "read_stream.h",
        "data_source.h",
        "write_stream.h",
        "data_destination.h",
    ];

    pub fn new(ctx: &'a CppContext) -> Self {
        Self {
            ctx,
            types: all_types(),
        }
    }

    fn write_variant(out: &mut FormattedOutput, index: usize, entry: &TypeEntry) {
        let ty = entry.name();
        out.line(&format!("class variant_{index} : public variant"));
        let mut body = out.terminated_block();
        body.line_adjusted("public:", -1);
        body.line(&format!("std::vector<ctle::{ty}> data;"));
        body.blank();
        body.line(&format!("virtual ~variant_{index}() override {{}}"));
        body.line(&format!(
            "virtual size_t type() const override {{ return {index}; }}"
        ));
        body.line(&format!(
            "virtual const char *type_name() const override {{ return \"{ty}\"; }}"
        ));
        body.line(&format!(
            "virtual size_t type_size() const override {{ return sizeof(ctle::{ty}); }}"
        ));
        body.line("virtual size_t type_count() const override { return this->data.size(); }");
        body.line("virtual bool is_equal( const variant &other ) const override { return _are_equal( *this, other ); }");
        body.line("virtual void clear() override { this->data.clear(); }");
        body.line("virtual const void *cdata() const override { return this->data.data(); }");
        body.line(&format!(
            "virtual void random() override {{ this->data = random_vector<ctle::{ty}>(); }}"
        ));
        body.line(&format!(
            "virtual ctle::status read_from_stream( ctle::read_stream<ctle::file_data_source,ctle::hasher_xxh128> &strm ) override {{ return _read_from_stream<ctle::{ty}>( strm, this->data ); }}"
        ));
        body.line(&format!(
            "virtual ctle::status write_to_stream( ctle::write_stream<ctle::file_data_destination,ctle::hasher_xxh128> &strm ) const override {{ return _write_to_stream<ctle::{ty}>( strm, this->data ); }}"
        ));
    }

    fn write_factories(&self, out: &mut FormattedOutput) {
        out.line("std::unique_ptr<variant> random_variant()");
        out.block()
            .line(&format!("return new_variant( rand() % {} );", self.types.len()));
        out.blank();

        out.line("std::unique_ptr<variant> new_variant( size_t inx )");
        let mut body = out.block();
        body.line("switch( inx )");
        let mut cases = body.block();
        for index in 0..self.types.len() {
            cases.line(&format!(
                "case {index}: return std::make_unique<variant_{index}>();"
            ));
        }
        cases.line("default: return std::unique_ptr<variant>(); // invalid");
    }
}

impl CppFile for VariantsCpp<'_> {
    fn relative_path(&self) -> String {
        self.ctx.tests_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for VariantsCpp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        self.ctx.preamble(&mut out);

        out.line("#include \"unit_tests.h\"");
        for header in Self::INCLUDES {
            out.line(&format!(
                "#include \"{}\"",
                self.ctx.include_from_tests(header)
            ));
        }
        out.blank();
        out.snippet(STREAM_HELPERS);
        out.blank();

        for (index, entry) in self.types.iter().enumerate() {
            Self::write_variant(&mut out, index, entry);
            out.blank();
        }
        self.write_factories(&mut out);
        Ok(out.to_text())
    }
}

const STREAM_HELPERS: &str = r#"
template<class _Ty> ctle::status _read_from_stream( ctle::read_stream<ctle::file_data_source,ctle::hasher_xxh128> &strm, std::vector<_Ty> &data )
{
	u32 cnt = 0;
	ctle::status res = strm.read<u32>( &cnt, 1 );
	if( !res )
		return res;
	data.resize(cnt);
	return strm.read<_Ty>( data.data(), data.size() );
}

template<class _Ty> ctle::status _write_to_stream( ctle::write_stream<ctle::file_data_destination,ctle::hasher_xxh128> &strm, const std::vector<_Ty> &data )
{
	ctle::status res = strm.write<u32>( (u32)data.size() );
	if( !res )
		return res;
	return strm.write<_Ty>( data.data(), data.size() );
}

bool _are_equal( const variant &a , const variant &b )
{
	if( a.type() != b.type() )
		return false;
	if( a.type_count() != b.type_count() )
		return false;
	return memcmp( a.cdata(), b.cdata(), a.type_size() * a.type_count() ) == 0;
}
"#;
