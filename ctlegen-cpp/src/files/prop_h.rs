use std::path::{Path, PathBuf};

use ctlegen_codegen::builder::FormattedOutput;
use ctlegen_core::{GeneratedFile, Result};

use super::CppFile;
use crate::{
    CppContext,
    catalog::property::{Property, properties},
};

/// `prop.h`: the `property_*` class templates.
pub struct PropH<'a> {
    ctx: &'a CppContext,
}

impl<'a> PropH<'a> {
    pub const FILE_NAME: &'static str = "prop.h";

    pub fn new(ctx: &'a CppContext) -> Self {
        Self { ctx }
    }
}

fn constructor(prop: &Property, class: &str) -> (String, String) {
    let mut params = Vec::new();
    let mut inits = Vec::new();
    if prop.value {
        params.push("const _Ty &value".to_string());
        inits.push("v(value)".to_string());
    }
    if let Some(get) = prop.get {
        params.push(format!(
            "const std::function<{} ( const {class} * )> _get",
            get.return_type()
        ));
        inits.push("get_method(_get)".to_string());
    }
    if prop.set {
        params.push(format!("std::function<void({class} *, const _Ty &)> _set"));
        inits.push("set_method(_set)".to_string());
    }
    (
        format!("{class}( {} ) :", params.join(", ")),
        format!("{} {{}}", inits.join(", ")),
    )
}

fn write_property(out: &mut FormattedOutput, prop: &Property) {
    let class = prop.class_name();
    out.line(if prop.value {
        "template<typename _Ty, typename _Owner>"
    } else {
        "template<typename _Ty>"
    });
    out.line(&format!("class {class}"));
    let mut body = out.terminated_block();

    body.line_adjusted("public:", -1);
    if prop.value {
        body.line("friend _Owner; // allow the owner of the property to directly modify the stored value v");
        body.blank();
    }
    let (signature, initializers) = constructor(prop, &class);
    body.line(&signature);
    body.begin_tab(None).line(&initializers).end_tab();
    body.blank();

    if let Some(get) = prop.get {
        let ty = get.return_type();
        body.line(&format!("{ty} get() const {{ return this->get_method(this); }}"));
        body.line(&format!("operator {ty} () const {{ return this->get(); }}"));
        body.blank();
    }
    if prop.set {
        body.line("void set(const _Ty &value) { this->set_method(this, value); }");
        body.line(&format!(
            "const {class} & operator= (const _Ty &value) {{ this->set(value); return *this; }}"
        ));
        body.blank();
    }

    body.line_adjusted("private:", -1);
    body.line(&format!("{class}() = delete;"));
    body.line(&format!("{class}( const {class} & ) = delete;"));
    body.line(&format!("const {class} & operator= ( const {class} & ) = delete;"));
    body.line(&format!("{class}( {class} && ) = delete;"));
    body.line(&format!("const {class} & operator= ( {class} && ) = delete;"));
    body.blank();
    if prop.value {
        body.line("_Ty v; // the stored value");
    }
    if let Some(get) = prop.get {
        body.line(&format!(
            "const std::function<{} (const {class} *)> get_method;",
            get.return_type()
        ));
    }
    if prop.set {
        body.line(&format!(
            "const std::function<void({class} *, const _Ty &)> set_method;"
        ));
    }
}

impl CppFile for PropH<'_> {
    fn relative_path(&self) -> String {
        self.ctx.include_path(Self::FILE_NAME)
    }
}

impl GeneratedFile for PropH<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> Result<String> {
        let mut out = self.ctx.output();
        {
            let mut header = self.ctx.header(&mut out, Self::FILE_NAME);
            header.line("#include <functional>");
            header.blank();
            let mut ns = header.namespace("ctle");
            ns.comment(
                "The property_[...] templates is a convenient way to implement properties in classes, \
                 where each property is accessed as normal variables, but can be made read-only, \
                 write-only, read/write, and let the owner override if a value is returned from a \
                 variable, or evaluated on-the-fly, etc.",
            );
            for (i, prop) in properties().iter().enumerate() {
                if i > 0 {
                    ns.blank();
                }
                write_property(&mut ns, prop);
            }
        }
        Ok(out.to_text())
    }
}

#[cfg(test)]
mod tests {
    use ctlegen_codegen::builder::{FormatOptions, Indent};
    use ctlegen_core::LicenseHeader;
    use insta::assert_snapshot;

    use super::*;
    use crate::catalog::property::Getter;

    #[test]
    fn test_value_property_with_getter() {
        let mut out = FormattedOutput::new(
            FormatOptions {
                indent: Indent::Spaces(4),
                ..FormatOptions::default()
            },
            LicenseHeader::default(),
        );
        let prop = Property {
            get: Some(Getter::GetCref),
            set: false,
            value: true,
        };
        write_property(&mut out, &prop);
        assert_snapshot!(out.to_text().trim_end(), @r"
        template<typename _Ty, typename _Owner>
        class property_getcref_value
        {
        public:
            friend _Owner; // allow the owner of the property to directly modify the stored value v

            property_getcref_value( const _Ty &value, const std::function<const _Ty & ( const property_getcref_value * )> _get ) :
                v(value), get_method(_get) {}

            const _Ty & get() const { return this->get_method(this); }
            operator const _Ty & () const { return this->get(); }

        private:
            property_getcref_value() = delete;
            property_getcref_value( const property_getcref_value & ) = delete;
            const property_getcref_value & operator= ( const property_getcref_value & ) = delete;
            property_getcref_value( property_getcref_value && ) = delete;
            const property_getcref_value & operator= ( property_getcref_value && ) = delete;

            _Ty v; // the stored value
            const std::function<const _Ty & (const property_getcref_value *)> get_method;
        };
        ");
    }

    #[test]
    fn test_every_variant_rendered() {
        let text = PropH::new(&CppContext::default()).render().unwrap();
        for prop in properties() {
            assert!(text.contains(&format!("class {}\n", prop.class_name())));
        }
        assert_eq!(text.matches("class property").count(), 10);
    }
}
