use crate::defs::*;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_quote,
    Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, GenericParam, Ident, Lit, LitStr,
    Meta, Type,
    ext::IdentExt,
};
use darling::FromMeta;
use proc_macro_error::abort;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Kind {
    #[default]
    Object,
    String,
    Int,
    Float,
    Long,
    Boolean,
}

impl Kind {

    fn variant(self) -> Ident {
        let name = match self {
            Kind::Object => "Object",
            Kind::String => "String",
            Kind::Int => "Int",
            Kind::Float => "Float",
            Kind::Long => "Long",
            Kind::Boolean => "Boolean",
        };
        format_ident!("{}", name)
    }

    fn rust_type(self) -> &'static str {
        match self {
            Kind::Object => "serde_json::Value",
            Kind::String => "String",
            Kind::Int => "i32",
            Kind::Float => "f32",
            Kind::Long => "i64",
            Kind::Boolean => "bool",
        }
    }

    /// The kind a plainly written field type holds. Aliases and other paths are
    /// left to the const check in `TaggedField::new`.
    fn of_type(ty: &Type) -> Option<Self> {
        let path = match ty {
            Type::Path(p) if p.qself.is_none() => &p.path,
            _ => return None,
        };

        let segment = path.segments.last()?;
        if !segment.arguments.is_empty() {
            return None;
        }

        match segment.ident.to_string().as_str() {
            "Value" => Some(Kind::Object),
            "String" => Some(Kind::String),
            "i32" => Some(Kind::Int),
            "f32" => Some(Kind::Float),
            "i64" => Some(Kind::Long),
            "bool" => Some(Kind::Boolean),
            _ => None,
        }
    }

}

// Accepts `kind = Int` as well as `kind = "int"`.
impl FromMeta for Kind {

    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "object" => Ok(Kind::Object),
            "string" => Ok(Kind::String),
            "int" => Ok(Kind::Int),
            "float" => Ok(Kind::Float),
            "long" => Ok(Kind::Long),
            "boolean" | "bool" => Ok(Kind::Boolean),
            _ => Err(darling::Error::custom(format!("unknown kind `{}`", value))),
        }
    }

    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Path(p) => match p.path.get_ident() {
                Some(ident) => Self::from_string(&ident.to_string()).map_err(|e| e.with_span(ident)),
                None => Err(darling::Error::unexpected_expr_type(expr)),
            },
            Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => {
                Self::from_string(&s.value()).map_err(|e| e.with_span(s))
            },
            Expr::Group(g) => Self::from_expr(&g.expr),
            _ => Err(darling::Error::unexpected_expr_type(expr)),
        }
    }

}

#[derive(Debug, Default, FromMeta)]
struct JsonSaveArgs {
    #[darling(default)]
    kind: Kind,
}

#[derive(Debug)]
struct SavedField {
    ident: Ident,
    ty: Type,
    kind: Kind,
}

fn is_json_save_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("json_save")
}

impl SavedField {

    fn from_field(field: &Field) -> Option<Self> {
        let mut attrs = field.attrs.iter().filter(|attr| is_json_save_attr(attr));

        let attr = attrs.next()?;
        if let Some(dup) = attrs.next() {
            abort!(dup, "Duplicate json_save attribute");
        }

        let args = match &attr.meta {
            Meta::Path(_) => JsonSaveArgs::default(),
            meta @ Meta::List(_) => match JsonSaveArgs::from_meta(meta) {
                Ok(a) => a,
                Err(e) => abort!(e.span(), "Invalid json_save args: {}", e),
            },
            Meta::NameValue(_) => abort!(attr, "Expected #[json_save] or #[json_save(kind = ...)]"),
        };

        let ident = match &field.ident {
            Some(i) => i.clone(),
            None => abort!(field, "json_save fields must be named"),
        };

        if let Some(found) = Kind::of_type(&field.ty) {
            if found != args.kind {
                abort!(
                    field.ty,
                    "json_save kind `{}` needs a field of type `{}`",
                    args.kind.variant(),
                    args.kind.rust_type()
                );
            }
        }

        Some(SavedField {
            ident,
            ty: field.ty.clone(),
            kind: args.kind,
        })
    }

    fn generate(&self) -> TokenStream {
        let ident = &self.ident;
        let ty = &self.ty;
        let kind = self.kind.variant();
        let name = LitStr::new(&ident.unraw().to_string(), ident.span());

        quote! {
            #TaggedField::new::<#ty>(
                #name,
                #ValueKind::#kind,
                |this| #FieldType::to_field_value(&this.#ident),
                |this, value| {
                    this.#ident = #FieldType::from_field_value(value)?;
                    #ResultOk(())
                },
            )
        }
    }

}

pub(crate) struct JsonSaveInfo {
    input: DeriveInput,
    fields: Vec<SavedField>,
}

impl JsonSaveInfo {

    pub fn process(input: DeriveInput) -> Self {
        let fields: Vec<&Field> = match &input.data {
            Data::Struct(s) => match &s.fields {
                Fields::Named(f) => f.named.iter().collect(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(_) => abort!(s.fields, "JsonSave struct can't have unnamed fields"),
            },
            Data::Enum(e) => abort!(e.enum_token, "JsonSave can only be derived for structs"),
            Data::Union(u) => abort!(u.union_token, "JsonSave can only be derived for structs"),
        };

        let fields = fields.into_iter()
            .filter_map(SavedField::from_field)
            .collect();

        JsonSaveInfo { input, fields }
    }

    pub fn generate(&self) -> TokenStream {
        let ident = &self.input.ident;

        // The descriptor table is 'static, so every type parameter must be too.
        let mut generics = self.input.generics.clone();
        let type_params: Vec<Ident> = generics.params.iter()
            .filter_map(|param| match param {
                GenericParam::Type(t) => Some(t.ident.clone()),
                _ => None,
            })
            .collect();
        let where_clause = generics.make_where_clause();
        for param in type_params {
            where_clause.predicates.push(parse_quote!(#param: 'static));
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let entries = self.fields.iter().map(SavedField::generate);

        quote! {
            impl #impl_generics #JsonSave for #ident #ty_generics #where_clause {
                const TAGGED_FIELDS: &'static [#TaggedField<Self>] = &[
                    #( #entries ),*
                ];
            }
        }
    }

}
