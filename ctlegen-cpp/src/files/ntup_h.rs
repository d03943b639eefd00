use std::path::{Path, PathBuf};

use ctlegen_codegen::builder::FormattedOutput;
use ctlegen_core::{GeneratedFile, Result};

use super::CppFile;
use crate::{
    CppContext,
    catalog::types::{COLOR_NAMES, MAX_DIMS, TypeEntry, VECTOR_NAMES, all_types},
};

/// `ntup.h`: `n_tup` and `mn_tup` templates for 1-4 dimensions, with
/// string conversions for every catalogued tuple type.
pub struct NtupH<'a> {
    ctx: &'a CppContext,
    types: Vec<TypeEntry>,
}

impl<'a> NtupH<'a> {
    pub const FILE_NAME: &'static str = "ntup.h";

    pub fn new(ctx: &'a CppContext) -> Self {
        Self {
            ctx,
            types: all_types(),
        }
    }

    fn tuples(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.iter().filter(|t| t.count() > 0)
    }
}

/// Member accessors of a tuple value, in order of significance.
fn members(entry: &TypeEntry) -> Vec<String> {
    match entry {
        TypeEntry::Scalar(_) => Vec::new(),
        TypeEntry::Tuple { dims, .. } => VECTOR_NAMES[..*dims]
            .iter()
            .map(|n| n.to_string())
            .collect(),
        TypeEntry::TupleOfTuples { outer, .. } => {
            (0..*outer).map(|i| format!("values[{i}]")).collect()
        }
    }
}

/// One ordering operator body: `wins` decides, `loses` short-circuits.
fn write_ordering(out: &mut FormattedOutput, members: &[String], wins: char, loses: char) {
    let mut body = out.block();
    for (i, m) in members.iter().enumerate() {
        body.line(&format!("if( this->{m} {wins} rhs.{m} ) {{ return true; }}"));
        if i + 1 < members.len() {
            body.line(&format!("if( this->{m} {loses} rhs.{m} ) {{ return false; }}"));
        } else {
            body.line("return false;");
        }
    }
}

fn write_comparisons(out: &mut FormattedOutput, class: &str, members: &[String]) {
    out.line(&format!("bool operator<( const {class} &rhs ) const noexcept"));
    write_ordering(out, members, '<', '>');
    out.line(&format!(
        "bool operator>=( const {class} &rhs ) const noexcept {{ return !this->operator<(rhs); }}"
    ));
    out.line(&format!("bool operator>( const {class} &rhs ) const noexcept"));
    write_ordering(out, members, '>', '<');
    out.line(&format!(
        "bool operator<=( const {class} &rhs ) const noexcept {{ return !this->operator>(rhs); }}"
    ));
    out.line(&format!("bool operator==( const {class} &rhs ) const noexcept"));
    {
        let mut body = out.block();
        for m in members {
            body.line(&format!("if( this->{m} != rhs.{m} ) {{ return false; }}"));
        }
        body.line("return true;");
    }
    out.line(&format!(
        "bool operator!=( const {class} &rhs ) const noexcept {{ return !this->operator==(rhs); }}"
    ));
}

fn write_n_tup(out: &mut FormattedOutput, dims: usize) {
    let names = &VECTOR_NAMES[..dims];

    out.comment(&format!("{dims}-dimensional n-tuple template"));
    out.line(&format!("template<class _Ty> class n_tup<_Ty,{dims}>"));
    let mut body = out.terminated_block();
    body.line_adjusted("public:", -1);
    body.line("using value_type = _Ty;");
    body.line(&format!("static constexpr const size_t dims = {dims};"));
    body.blank();

    body.raw_line("#ifdef CTLE_N_TUP_ONLY_XYZW");
    for (i, n) in names.iter().enumerate() {
        body.line(&format!("_Ty {n}; // [{i}]"));
    }
    body.raw_line("#else//CTLE_N_TUP_ONLY_XYZW");
    for (i, (n, c)) in names.iter().zip(COLOR_NAMES).enumerate() {
        body.line(&format!("union {{ _Ty {n}; _Ty {c}; }}; // [{i}]"));
    }
    body.raw_line("#endif//CTLE_N_TUP_ONLY_XYZW");
    body.blank();

    body.comment("ctors/dtor");
    let zero: String = names.iter().map(|n| format!("{n} = 0; ")).collect();
    body.line(&format!("n_tup() noexcept {{ {zero}}}"));
    let params: Vec<String> = names.iter().map(|n| format!("_Ty _{n}")).collect();
    let assign: String = names.iter().map(|n| format!("{n} = _{n}; ")).collect();
    body.line(&format!("n_tup( {} ) noexcept {{ {assign}}}", params.join(", ")));
    let from_array: String = names
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{n} = values[{i}]; "))
        .collect();
    body.line(&format!("n_tup( const _Ty *values ) noexcept {{ {from_array}}}"));
    body.line("n_tup( const n_tup &other ) noexcept = default;");
    body.line("n_tup &operator=( const n_tup &other ) noexcept = default;");
    body.line("~n_tup() noexcept = default;");
    body.blank();

    body.comment("cmps ops, (order of significance: x>y>z>w)");
    let member_names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    write_comparisons(&mut body, "n_tup", &member_names);
    body.blank();

    body.snippet(N_TUP_ACCESS);
    body.blank();

    body.raw_line("#ifdef GLM_VERSION");
    body.comment("conversions to/from glm (to enable, include glm.hpp before including ntup.h)");
    let copy: String = names.iter().map(|n| format!("{n} = other.{n}; ")).collect();
    body.line(&format!(
        "n_tup( const glm::vec<{dims},_Ty> &other ) noexcept {{ {copy}}}"
    ));
    body.line(&format!(
        "n_tup &operator=( const glm::vec<{dims},_Ty> &other ) noexcept {{ {copy}return *this; }}"
    ));
    body.line(&format!(
        "operator glm::vec<{dims},_Ty>() const noexcept {{ return glm::vec<{dims},_Ty>( {} ); }}",
        names.join(", ")
    ));
    body.raw_line("#endif//GLM_VERSION");
}

fn write_mn_tup(out: &mut FormattedOutput, outer: usize) {
    let indices = 0..outer;

    out.comment(&format!("{outer}-dimensional tuple-of-tuples template"));
    out.line(&format!(
        "template<class _Ty, size_t _InnerSize> class mn_tup<_Ty,_InnerSize,{outer}/*_OuterSize*/>"
    ));
    let mut body = out.terminated_block();
    body.line_adjusted("public:", -1);
    body.line("using inner_type = n_tup<_Ty,_InnerSize>; ///< subtuple type");
    body.line("static constexpr const size_t inner_dims = _InnerSize; ///< size of each subtuple");
    body.line(&format!(
        "static constexpr const size_t outer_dims = {outer}; ///< number of subtuples"
    ));
    body.blank();

    body.comment(
        "By default, mn_tup does not define row or column major order, but if \
         CTLE_MN_TUP_COLUMNMAJOR or CTLE_MN_TUP_ROWMAJOR is defined, also define the number of \
         columns and number of rows in the MxN matrix the tuple-of-tuples represents.",
    );
    body.raw_line("#if defined(CTLE_MN_TUP_COLUMNMAJOR)");
    body.line("static constexpr const size_t num_rows = _InnerSize;");
    body.line(&format!("static constexpr const size_t num_columns = {outer};"));
    body.raw_line("#elif defined(CTLE_MN_TUP_ROWMAJOR)");
    body.line(&format!("static constexpr const size_t num_rows = {outer};"));
    body.line("static constexpr const size_t num_columns = _InnerSize;");
    body.raw_line("#endif");
    body.blank();
    body.line(&format!(
        "n_tup<_Ty,_InnerSize> values[{outer}]; // {outer} values of tuple type"
    ));
    body.blank();

    body.comment("ctors/dtor");
    let params: Vec<String> = indices
        .clone()
        .map(|i| format!("const n_tup<_Ty,_InnerSize> &value{i} = {{}}"))
        .collect();
    let assign: String = indices
        .clone()
        .map(|i| format!("values[{i}] = value{i}; "))
        .collect();
    body.line(&format!("mn_tup( {} ) noexcept {{ {assign}}}", params.join(", ")));
    let from_array: String = indices
        .clone()
        .map(|i| format!("values[{i}] = _values[{i}]; "))
        .collect();
    body.line(&format!(
        "mn_tup( const n_tup<_Ty,_InnerSize> *_values ) noexcept {{ {from_array}}}"
    ));
    body.line("mn_tup( const mn_tup &other ) noexcept = default;");
    body.line("mn_tup &operator=( const mn_tup &other ) noexcept = default;");
    body.line("~mn_tup() noexcept = default;");
    body.blank();

    body.comment("cmps ops, (order of significance: 0>1>2>3)");
    let member_names: Vec<String> = indices.clone().map(|i| format!("values[{i}]")).collect();
    write_comparisons(&mut body, "mn_tup", &member_names);
    body.blank();

    body.snippet(MN_TUP_ACCESS);
    body.blank();

    let mat = format!("glm::mat<{outer},_InnerSize,_Ty>");
    let copy: String = indices
        .clone()
        .map(|i| format!("values[{i}] = n_tup<_Ty,_InnerSize>(other[{i}]); "))
        .collect();
    body.raw_line("#ifdef GLM_VERSION");
    body.comment("conversions to/from glm (to enable, include glm.hpp before including ntup.h)");
    body.line(&format!("mn_tup( const {mat} &other ) noexcept {{ {copy}}}"));
    body.line(&format!(
        "mn_tup &operator=( const {mat} &other ) noexcept {{ {copy}return *this; }}"
    ));
    body.line(&format!(
        "operator {mat}() const noexcept {{ return {mat}( {} ); }}",
        member_names.join(", ")
    ));
    body.raw_line("#endif//GLM_VERSION");
}

impl NtupH<'_> {
    fn write_implementation(&self, out: &mut FormattedOutput) {
        out.raw_line("#ifdef CTLE_IMPLEMENTATION");
        out.blank();
        out.comment("Print types to strings.");
        for entry in self.tuples() {
            let parts: Vec<String> = members(entry)
                .iter()
                .map(|m| format!("to_string(val.{m})"))
                .collect();
            out.line(&format!(
                "template<> std::string to_string( const {} &val ) {{ return {}; }}",
                entry.name(),
                parts.join(" + \" \" + ")
            ));
        }
        out.blank();

        out.snippet(FROM_STRING_HELPERS);
        out.blank();

        for entry in self.tuples() {
            let ty = entry.name();
            let helper = match entry {
                TypeEntry::TupleOfTuples { .. } => "_mn_tup_from_string",
                _ => "_n_tup_from_string",
            };
            out.line(&format!(
                "template<> {ty} from_string( const string_span<char> &str, bool &result ) noexcept {{ return {helper}<{ty}>(str, result); }}"
            ));
            out.line(&format!(
                "template<> {ty} from_string( const string_span<char> &str ) {{ return {helper}<{ty}>(str); }}"
            ));
        }
        out.blank();
        out.raw_line("#endif//CTLE_IMPLEMENTATION");
    }
}

impl CppFile for NtupH<'_> {
    fn relative_path(&self) -> String {
        self.ctx.include_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for NtupH<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        {
            let mut header = self.ctx.header(&mut out, Self::FILE_NAME);
            header.snippet(PREAMBLE);
            header.blank();

            let mut ns = header.namespace("ctle");
            ns.push_and_disable_warnings(
                &["4201"],
                &["-Wpedantic"],
                "n_tup uses anonymous unions to alias the x/y/z/w and r/g/b/a members",
            );
            ns.blank();
            for dims in 1..=MAX_DIMS {
                write_n_tup(&mut ns, dims);
                ns.blank();
            }
            ns.pop_warnings("restore the warning state");
            ns.blank();

            for outer in 1..=MAX_DIMS {
                write_mn_tup(&mut ns, outer);
                ns.blank();
            }
            self.write_implementation(&mut ns);
        }
        Ok(out.to_text())
    }
}

const PREAMBLE: &str = r#"
/// @file ntup.h
/// @brief n-tuple (N - vectors) and mn-tuple (M x N - matrices) templates. 1-4 dimensions.
/// @details The ntup.h templates is a lightweight way to define vectors and matrices of 1-4 dimensions, with
/// comparison operators and conversions to / from glm types. To enable glm conversions, include
/// glm.hpp before including ntup.h in any file where the conversion is to be supported.

// Only one of CTLE_MN_TUP_COLUMNMAJOR and CTLE_MN_TUP_ROWMAJOR can be defined.
#if defined(CTLE_MN_TUP_COLUMNMAJOR) && defined(CTLE_MN_TUP_ROWMAJOR)
#error Invalid: cannot have CTLE_MN_TUP_COLUMNMAJOR and CTLE_MN_TUP_ROWMAJOR defined at the same time.
#endif//CTLE_MN_TUP_COLUMNMAJOR && CTLE_MN_TUP_ROWMAJOR

#include <cinttypes>
#include <limits>
#include <vector>

#include "types.h"
#include "string_funcs.h"
#include "status.h"
#include "status_return.h"
"#;

const N_TUP_ACCESS: &str = r#"
// data access
const _Ty *data() const noexcept { return &this->x; }
_Ty *data() noexcept { return &this->x; }

// index operator
const _Ty &at( size_t index ) const noexcept { return (&this->x)[index]; }
_Ty &at( size_t index ) noexcept { return (&this->x)[index]; }
const _Ty &operator[]( size_t index ) const noexcept { return (&this->x)[index]; }
_Ty &operator[]( size_t index ) noexcept { return (&this->x)[index]; }
"#;

const MN_TUP_ACCESS: &str = r#"
// data access
const _Ty *data() const noexcept { return this->values->data(); }
_Ty *data() noexcept { return this->values->data(); }

// index operator
const n_tup<_Ty,_InnerSize> &at( size_t index ) const noexcept { return this->values[index]; }
n_tup<_Ty,_InnerSize> &at( size_t index ) noexcept { return this->values[index]; }
const n_tup<_Ty,_InnerSize> &operator[]( size_t index ) const noexcept { return this->values[index]; }
n_tup<_Ty,_InnerSize> &operator[]( size_t index ) noexcept { return this->values[index]; }
"#;

const FROM_STRING_HELPERS: &str = r#"
template<class _Ty> inline _Ty _n_tup_from_string( const string_span<char> &str, bool &result ) noexcept
{
	using basic_type = typename _Ty::value_type;

	std::vector<string_span<char>> toks;
	if( !lex_t<char>( &toks, str ) || toks.size() != _Ty::dims )
	{
		result = false;
		return {};
	}

	_Ty val = {};
	for( size_t inx=0; inx<_Ty::dims; ++inx )
	{
		// use the non-throwing conversion, and check the result
		val[inx] = from_string<basic_type>(toks[inx], result);
		if( !result )
		{
			return {}; // the conversion failed, return empty
		}
	}
	return val;
}
template<class _Ty> inline _Ty _n_tup_from_string( const string_span<char> &str )
{
	bool result = true;
	auto val = _n_tup_from_string<_Ty>(str, result);
	if( !result )
	{
		throw std::out_of_range("In ctle::from_string(): Could not convert from string to value, either wrong number of items, or the values are out of range.");
	}
	return val;
}

template<class _Ty> inline _Ty _mn_tup_from_string( const string_span<char> &str, bool &result ) noexcept
{
	constexpr const size_t total_values = _Ty::outer_dims * _Ty::inner_dims;
	using basic_type = typename _Ty::inner_type::value_type;

	std::vector<string_span<char>> toks;
	if( !lex_t<char>( &toks, str ) || toks.size() != total_values )
	{
		result = false;
		return {};
	}

	_Ty val = {};
	for( size_t inx=0; inx<_Ty::outer_dims; ++inx )
	{
		auto &tup = val.values[inx];
		for( size_t n=0; n<_Ty::inner_dims; ++n )
		{
			// use the non-throwing conversion, and check the result
			tup[n] = from_string<basic_type>(toks[(inx*_Ty::inner_dims) + n], result);
			if( !result )
			{
				return {}; // the conversion failed, return empty
			}
		}
	}
	return val;
}
template<class _Ty> inline _Ty _mn_tup_from_string( const string_span<char> &str )
{
	bool result = true;
	auto val = _mn_tup_from_string<_Ty>(str, result);
	if( !result )
	{
		throw std::out_of_range("In ctle::from_string(): Could not convert from string to value, either wrong number of items, or the values are out of range.");
	}
	return val;
}
"#;
