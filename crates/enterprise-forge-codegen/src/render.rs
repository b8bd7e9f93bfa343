//! Renders a [`CompilationUnit`] to text with 4-space indentation.
//!
//! The output is not yet normalized; see
//! [`normalize_whitespace`](crate::normalize_whitespace).

use crate::syntax::{ClassDecl, CompilationUnit, Modifier, PropertyDecl, RecordDecl, TypeDecl};

const INDENT: &str = "    ";

pub fn render(unit: &CompilationUnit) -> String {
    let mut output = String::new();
    print_unit(unit, &mut output);
    output
}

fn print_unit(unit: &CompilationUnit, output: &mut String) {
    let namespace = &unit.namespace;
    output.push_str("namespace ");
    output.push_str(&namespace.name);
    output.push_str("\n{\n");

    for (i, decl) in namespace.types.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        match decl {
            TypeDecl::Class(class) => print_class(class, 1, output),
            TypeDecl::Record(record) => print_record(record, 1, output),
        }
    }

    output.push_str("}\n");
}

fn print_class(class: &ClassDecl, depth: usize, output: &mut String) {
    indent(depth, output);
    print_modifiers(&class.modifiers, output);
    output.push_str("class ");
    output.push_str(&class.name);
    output.push('\n');
    indent(depth, output);
    output.push_str("{\n");

    for property in &class.properties {
        print_property(property, depth + 1, output);
    }

    indent(depth, output);
    output.push_str("}\n");
}

fn print_property(property: &PropertyDecl, depth: usize, output: &mut String) {
    indent(depth, output);
    print_modifiers(&property.modifiers, output);
    output.push_str(&property.type_name);
    output.push(' ');
    output.push_str(&property.name);
    output.push_str(" {");
    for accessor in &property.accessors {
        output.push(' ');
        output.push_str(accessor.keyword());
        output.push(';');
    }
    output.push_str(" }\n");
}

fn print_record(record: &RecordDecl, depth: usize, output: &mut String) {
    indent(depth, output);
    print_modifiers(&record.modifiers, output);
    output.push_str("record ");
    output.push_str(&record.name);
    output.push('(');
    for (i, parameter) in record.parameters.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        output.push_str(&parameter.type_name);
        output.push(' ');
        output.push_str(&parameter.name);
    }
    output.push_str(");\n");
}

fn print_modifiers(modifiers: &[Modifier], output: &mut String) {
    for modifier in modifiers {
        output.push_str(modifier.keyword());
        output.push(' ');
    }
}

fn indent(depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Accessor, NamespaceDecl, Parameter};

    fn unit(types: Vec<TypeDecl>) -> CompilationUnit {
        CompilationUnit {
            namespace: NamespaceDecl {
                name: "Acme.Crm".into(),
                types,
            },
        }
    }

    #[test]
    fn renders_class_with_properties() {
        let class = TypeDecl::Class(ClassDecl {
            modifiers: vec![Modifier::Public],
            name: "Customer".into(),
            properties: vec![PropertyDecl {
                modifiers: vec![Modifier::Public],
                type_name: "int".into(),
                name: "Id".into(),
                accessors: vec![Accessor::Get, Accessor::Set],
            }],
        });
        assert_eq!(
            render(&unit(vec![class])),
            "namespace Acme.Crm\n{\n    public class Customer\n    {\n        public int Id { get; set; }\n    }\n}\n"
        );
    }

    #[test]
    fn renders_record_parameters_in_order() {
        let record = TypeDecl::Record(RecordDecl {
            modifiers: vec![Modifier::Public, Modifier::Sealed],
            name: "OrderKey".into(),
            parameters: vec![
                Parameter {
                    type_name: "int".into(),
                    name: "OrderId".into(),
                },
                Parameter {
                    type_name: "long".into(),
                    name: "LineNo".into(),
                },
            ],
        });
        assert_eq!(
            render(&unit(vec![record])),
            "namespace Acme.Crm\n{\n    public sealed record OrderKey(int OrderId, long LineNo);\n}\n"
        );
    }

    #[test]
    fn separates_types_with_blank_line() {
        let record = |name: &str| {
            TypeDecl::Record(RecordDecl {
                modifiers: vec![Modifier::Public],
                name: name.into(),
                parameters: Vec::new(),
            })
        };
        let text = render(&unit(vec![record("A"), record("B")]));
        assert!(text.contains("public record A();\n\n    public record B();"));
    }
}
