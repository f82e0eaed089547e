//! Section resolution and value assignment.
//!
//! One [`Entry`] is applied in two passes. [`Pass::Sections`] only touches
//! fields holding a single section struct, [`Pass::Subsections`] only touches
//! subsection maps. Running every entry through the first pass before any
//! entry goes through the second guarantees `default-<section>` templates are
//! complete before a subsection is created from them.

use core::any::Any;

use crate::diagnostic::{Diagnostics, Location};
use crate::field::{FieldKind, FieldMut};
use crate::fold::find_field;
use crate::schema::{Schema, SchemaError};
use crate::section::Section;
use crate::value::RawValue;

/// Which fields of the root a call to [`set`] is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Sections,
    Subsections,
}

/// One tokenized configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub section: &'a str,
    /// `None` and `Some("")` both address the section itself.
    pub subsection: Option<&'a str>,
    /// Empty to only create the section or subsection.
    pub name: &'a str,
    /// `None` for a blank entry (a name without `=`).
    pub value: Option<&'a str>,
}

impl<'a> Entry<'a> {
    pub fn new(
        section: &'a str,
        subsection: Option<&'a str>,
        name: &'a str,
        value: Option<&'a str>,
    ) -> Self {
        Entry {
            section,
            subsection,
            name,
            value,
        }
    }

    pub fn value(section: &'a str, subsection: Option<&'a str>, name: &'a str, value: &'a str) -> Self {
        Entry::new(section, subsection, name, Some(value))
    }

    pub fn blank(section: &'a str, subsection: Option<&'a str>, name: &'a str) -> Self {
        Entry::new(section, subsection, name, None)
    }

    /// Header entry: materializes the section or subsection only.
    pub fn header(section: &'a str, subsection: Option<&'a str>) -> Self {
        Entry::new(section, subsection, "", None)
    }

    fn subsection_name(&self) -> &'a str {
        self.subsection.unwrap_or_default()
    }

    fn location(&self) -> Location {
        Location::variable(self.section, self.subsection, self.name)
    }
}

/// What [`set`] did with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The section is not declared; an extra-data diagnostic was recorded.
    UnknownSection,
    /// The section belongs to the other pass.
    OtherPass,
    /// The entry was applied, possibly recording diagnostics.
    Handled,
}

/// Applies one entry to `root` for the given pass.
///
/// Every data problem is pushed onto `diagnostics`; nothing here fails.
pub fn set(diagnostics: &mut Diagnostics, root: &mut dyn Section, entry: &Entry<'_>, pass: Pass) -> Applied {
    let schema = root.schema();
    let Some((index, _)) = find_field(schema, entry.section) else {
        diagnostics.extra_data(Location::section(entry.section));
        return Applied::UnknownSection;
    };
    let kind = schema.fields[index].kind;
    let wanted = match pass {
        Pass::Sections => !kind.is_subsection_map(),
        Pass::Subsections => kind.is_subsection_map(),
    };
    if !wanted {
        return Applied::OtherPass;
    }
    tracing::trace!(
        section = entry.section,
        subsection = entry.subsection,
        name = entry.name,
        ?pass,
        "applying entry"
    );

    match kind {
        FieldKind::FlatSubsections => store_flat(root, index, entry),
        FieldKind::Subsections => {
            let section = subsection_instance(root, index, entry);
            assign_variable(diagnostics, section, entry);
        }
        FieldKind::Section => {
            if !entry.subsection_name().is_empty() {
                diagnostics.extra_data(Location::subsection(entry.section, entry.subsection));
                return Applied::Handled;
            }
            let Some(FieldMut::Section(section)) = root.field_at(index) else {
                shape_mismatch(schema, index)
            };
            assign_variable(diagnostics, section, entry);
        }
        _ => not_a_section(schema, index),
    }
    Applied::Handled
}

fn store_flat(root: &mut dyn Section, index: usize, entry: &Entry<'_>) {
    let schema = root.schema();
    let Some(FieldMut::FlatSubsections(map)) = root.field_at(index) else {
        shape_mismatch(schema, index)
    };
    let value = match entry.value {
        Some(value) if !value.is_empty() => value,
        _ => return,
    };
    let key = match entry.subsection_name() {
        "" => entry.name.to_string(),
        subsection => format!("{subsection} {}", entry.name),
    };
    map.insert_flat(key, value.to_string());
}

/// Fetches the subsection addressed by `entry`, creating it on first use.
fn subsection_instance<'r>(root: &'r mut dyn Section, index: usize, entry: &Entry<'_>) -> &'r mut dyn Section {
    let schema = root.schema();
    let name = entry.subsection_name();
    let exists = match root.field_at(index) {
        Some(FieldMut::Subsections(map)) => map.contains_subsection(name),
        _ => shape_mismatch(schema, index),
    };
    let template = if exists { None } else { default_template(root, entry.section) };

    let Some(FieldMut::Subsections(map)) = root.field_at(index) else {
        shape_mismatch(schema, index)
    };
    if exists {
        return match map.subsection_mut(name) {
            Some(section) => section,
            None => shape_mismatch(schema, index),
        };
    }
    tracing::debug!(
        section = entry.section,
        subsection = name,
        from_default = template.is_some(),
        "creating subsection"
    );
    map.insert_subsection(name, template)
}

/// Deep copy of the root's `default-<section>` field, if it declares one.
fn default_template(root: &mut dyn Section, section: &str) -> Option<Box<dyn Any>> {
    let default_name = format!("default-{section}");
    let (index, _) = find_field(root.schema(), &default_name)?;
    match root.field_at(index)? {
        FieldMut::Section(default) => {
            tracing::debug!(section, field = %default_name, "propagating default");
            Some(default.clone_boxed())
        }
        _ => None,
    }
}

fn assign_variable(diagnostics: &mut Diagnostics, section: &mut dyn Section, entry: &Entry<'_>) {
    if entry.name.is_empty() {
        return;
    }
    let schema = section.schema();
    let Some((index, tag)) = find_field(schema, entry.name) else {
        capture_extra(diagnostics, section, entry);
        return;
    };
    let type_name = schema.fields[index].type_name;
    let Some(field) = section.field_at(index) else {
        shape_mismatch(schema, index)
    };
    let value = RawValue {
        text: entry.value,
        tag: &tag,
    };
    if let Err(error) = field.assign(&value, type_name) {
        diagnostics.value_error(entry.location(), error);
    }
}

fn capture_extra(diagnostics: &mut Diagnostics, section: &mut dyn Section, entry: &Entry<'_>) {
    let schema = section.schema();
    let Some(index) = schema.extra_values_index() else {
        diagnostics.extra_data(entry.location());
        return;
    };
    let Some(FieldMut::ExtraValues(extra)) = section.field_at(index) else {
        shape_mismatch(schema, index)
    };
    tracing::debug!(
        section = entry.section,
        subsection = entry.subsection,
        name = entry.name,
        "capturing extra value"
    );
    extra.record(entry.name, entry.value.unwrap_or_default());
}

/// A `Section` implementation whose handles disagree with its own schema.
fn shape_mismatch(schema: &Schema, index: usize) -> ! {
    let field = schema.fields.get(index).map_or("<out of range>", |field| field.name);
    panic!(
        "`{}::field_at({index})` does not match the declared shape of field `{field}`",
        schema.type_name
    )
}

/// A root that skipped [`Schema::validate`] and holds a plain value.
fn not_a_section(schema: &Schema, index: usize) -> ! {
    let error = SchemaError::NotASection {
        type_name: schema.type_name,
        field: schema.fields[index].name,
    };
    panic!("{error}")
}

/// Applies entries to a root configuration value and collects diagnostics.
pub struct Assigner<'c, C: Section> {
    root: &'c mut C,
    diagnostics: Diagnostics,
}

impl<'c, C: Section> Assigner<'c, C> {
    /// Validates the schema of `C` before anything is assigned.
    pub fn new(root: &'c mut C) -> Result<Self, SchemaError> {
        C::describe().validate()?;
        Ok(Assigner {
            root,
            diagnostics: Diagnostics::new(),
        })
    }

    pub fn set(&mut self, entry: &Entry<'_>, pass: Pass) -> Applied {
        set(&mut self.diagnostics, &mut *self.root, entry, pass)
    }

    /// Applies one entry in both passes.
    ///
    /// Only use this when no entry relies on a `default-<section>` value that
    /// arrives later; [`Assigner::assign_all`] orders the passes globally.
    pub fn apply(&mut self, entry: &Entry<'_>) {
        if self.set(entry, Pass::Sections) != Applied::UnknownSection {
            self.set(entry, Pass::Subsections);
        }
    }

    /// Runs the section pass over every entry, then the subsection pass over
    /// the entries whose section is declared.
    pub fn assign_all<'e, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = Entry<'e>>,
    {
        let known: Vec<Entry<'e>> = entries
            .into_iter()
            .filter(|entry| self.set(entry, Pass::Sections) != Applied::UnknownSection)
            .collect();
        for entry in &known {
            self.set(entry, Pass::Subsections);
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Validates the schema of `C`, applies every entry in pass order and
/// returns the collected diagnostics.
pub fn assign_all<'e, C, I>(root: &mut C, entries: I) -> Result<Diagnostics, SchemaError>
where
    C: Section,
    I: IntoIterator<Item = Entry<'e>>,
{
    let mut assigner = Assigner::new(root)?;
    assigner.assign_all(entries);
    Ok(assigner.finish())
}
