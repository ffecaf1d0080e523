use proc_macro2::TokenStream;
use quote::quote;

use crate::subject::{SubjectInput, local};

/// Which `Because` entry point a macro calls.
#[derive(Clone, Copy)]
pub enum Entry {
    Argument,
    ArgumentOutOfRange,
    IndexOutOfRange,
}

impl Entry {
    fn method(self) -> TokenStream {
        match self {
            Entry::Argument => quote!(argument),
            Entry::ArgumentOutOfRange => quote!(argument_out_of_range),
            Entry::IndexOutOfRange => quote!(index_out_of_range),
        }
    }
}

/// `(&&&&Probe(binding)).xception_kind().value(binding)`
fn value_of(binding: &proc_macro2::Ident) -> TokenStream {
    quote! {
        (&&&&::xception::__private::Probe(#binding)).xception_kind().value(#binding)
    }
}

pub fn described(entry: Entry, input: SubjectInput) -> syn::Result<TokenStream> {
    input.require_reason()?;

    let SubjectInput {
        subject,
        name,
        reasons,
    } = input;

    let subject_binding = local("__xception_subject");
    let reason_bindings: Vec<_> = (0..reasons.len())
        .map(|idx| local(&format!("__xception_reason_{idx}")))
        .collect();

    let subject_value = value_of(&subject_binding);
    let mut reason_values = reason_bindings.iter().map(value_of);
    let first_reason = reason_values.next();
    let rest_reasons: Vec<_> = reason_values.collect();
    let method = entry.method();

    Ok(quote! {
        {
            #[allow(unused_imports)]
            use ::xception::__private::{
                DisplayKind as _, OpaqueKind as _, OpaqueOptionKind as _, OptionKind as _,
            };

            let #subject_binding = &(#subject);
            #( let #reason_bindings = &(#reasons); )*

            ::xception::Because::DEFAULT.#method(
                #name,
                #subject_value,
                #first_reason,
                &[#( #rest_reasons ),*],
            )
        }
    })
}

pub fn null(input: SubjectInput) -> syn::Result<TokenStream> {
    input.require_no_reason()?;

    let SubjectInput { subject, name, .. } = input;

    Ok(quote! {
        ::xception::Because::DEFAULT.argument_null(#name, &(#subject))
    })
}
