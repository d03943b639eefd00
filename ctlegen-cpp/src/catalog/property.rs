//! Property template variants emitted into `prop.h`.

/// How a property exposes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Getter {
    /// Returns `_Ty` by value.
    Get,
    /// Returns `const _Ty &`.
    GetCref,
}

impl Getter {
    pub fn suffix(self) -> &'static str {
        match self {
            Getter::Get => "get",
            Getter::GetCref => "getcref",
        }
    }

    pub fn return_type(self) -> &'static str {
        match self {
            Getter::Get => "_Ty",
            Getter::GetCref => "const _Ty &",
        }
    }
}

/// One `property_*` class template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub get: Option<Getter>,
    pub set: bool,
    /// Stores the value inside the property, owned by `_Owner`.
    pub value: bool,
}

impl Property {
    /// `property[_get|_getcref][_set][_value]`
    pub fn class_name(&self) -> String {
        let mut name = String::from("property");
        if let Some(get) = self.get {
            name.push('_');
            name.push_str(get.suffix());
        }
        if self.set {
            name.push_str("_set");
        }
        if self.value {
            name.push_str("_value");
        }
        name
    }
}

/// Every property variant with at least a getter or a setter, in output order.
pub fn properties() -> Vec<Property> {
    let mut all = Vec::new();
    for value in [false, true] {
        for set in [true, false] {
            for get in [Some(Getter::Get), Some(Getter::GetCref), None] {
                if get.is_none() && !set {
                    continue;
                }
                all.push(Property { get, set, value });
            }
        }
    }
    all
}
