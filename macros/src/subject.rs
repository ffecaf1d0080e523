use proc_macro2::Span;
use syn::{
    Expr, Ident, Member, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

/// `subject, reason, more...`
pub struct SubjectInput {
    pub subject: Expr,
    pub name: String,
    pub reasons: Vec<Expr>,
}

impl Parse for SubjectInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let mut exprs = Punctuated::<Expr, Token![,]>::parse_terminated(input)?.into_iter();

        let Some(subject) = exprs.next() else {
            return Err(syn::Error::new(
                span,
                "expected an identifier or field access naming the subject",
            ));
        };
        let name = member_name(&subject)?;

        Ok(Self {
            subject,
            name,
            reasons: exprs.collect(),
        })
    }
}

impl SubjectInput {
    /// Requires at least one reason after the subject.
    pub fn require_reason(&self) -> syn::Result<()> {
        if self.reasons.is_empty() {
            return Err(syn::Error::new(
                self.subject.span(),
                "expected at least one reason after the subject",
            ));
        }
        Ok(())
    }

    /// Requires the subject and nothing else.
    pub fn require_no_reason(&self) -> syn::Result<()> {
        match self.reasons.first() {
            Some(extra) => Err(syn::Error::new(
                extra.span(),
                "unexpected reason: a null argument needs no explanation",
            )),
            None => Ok(()),
        }
    }
}

/// Name of the member an expression refers to.
///
/// Accepts identifiers, paths and named field accesses, looking through
/// parentheses, references and casts. The name is always the last
/// identifier: `self.limits.max` names `max`.
pub fn member_name(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Paren(e) => member_name(&e.expr),
        Expr::Group(e) => member_name(&e.expr),
        Expr::Reference(e) => member_name(&e.expr),
        Expr::Cast(e) => member_name(&e.expr),
        Expr::Path(e) if e.qself.is_none() => match e.path.segments.last() {
            Some(segment) if segment.arguments.is_empty() => Ok(ident_name(&segment.ident)),
            _ => Err(not_a_member(expr)),
        },
        Expr::Field(e) => match &e.member {
            Member::Named(ident) => Ok(ident_name(ident)),
            Member::Unnamed(_) => Err(syn::Error::new(
                e.member.span(),
                "does not reference a named field",
            )),
        },
        _ => Err(not_a_member(expr)),
    }
}

fn ident_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

fn not_a_member(expr: &Expr) -> syn::Error {
    syn::Error::new(
        expr.span(),
        "does not reference a variable or field; expected an identifier or field access",
    )
}

/// Hygienic local for generated bindings.
pub fn local(name: &str) -> Ident {
    Ident::new(name, Span::mixed_site())
}
