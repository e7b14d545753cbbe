/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Generates one Rust module per selected engine class.
//!
//! Every method body is the same mechanical sequence: look up the cached method bind, build a
//! `CallFrame` with the arguments, invoke `object_method_bind_ptrcall`, take the return slot.
//! Selected vararg methods go through the variant-based `object_method_bind_call` instead and
//! surface the engine's `CallError`.

use std::collections::BTreeSet;

use heck::ToSnakeCase;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;

use crate::api_parser::{Class, ClassMethod};
use crate::context::Context;
use crate::conv::{class_ident, safe_snake_ident, to_rust_type, RustTy};
use crate::special_cases;
use crate::util::ident;

/// File name for a class module: `Node2D` -> `node2d.rs`.
pub fn module_name(class_name: &str) -> String {
    class_name.to_snake_case().replace("2_d", "2d").replace("3_d", "3d")
}

pub fn make_class_module(class: &Class, ctx: &Context) -> TokenStream {
    let class_name = class.name.as_str();
    let class_ty = class_ident(class_name);

    let ptrcall_methods: Vec<&ClassMethod> = class
        .methods
        .iter()
        .flatten()
        .filter(|m| is_method_generated(class_name, m, ctx))
        .collect();

    let varcall_methods: Vec<&ClassMethod> = class
        .methods
        .iter()
        .flatten()
        .filter(|m| is_varcall_generated(class_name, m, ctx))
        .collect();

    let binds: Vec<&ClassMethod> = ptrcall_methods
        .iter()
        .chain(varcall_methods.iter())
        .copied()
        .collect();

    let bind_fields = binds.iter().map(|m| {
        let field = safe_snake_ident(&m.name);
        quote! { #field: sys::GDExtensionMethodBindPtr, }
    });

    let bind_inits = binds.iter().map(|m| {
        let field = safe_snake_ident(&m.name);
        let name_str = m.name.as_str();
        let hash = Literal::i64_unsuffixed(m.hash.expect("selected method without hash"));
        quote! { #field: load_method_bind(#class_ty::CLASS, #name_str, #hash), }
    });

    let method_fns: Vec<TokenStream> = ptrcall_methods
        .iter()
        .map(|m| make_method(class_name, m, ctx))
        .chain(varcall_methods.iter().map(|m| make_varcall_method(class_name, m, ctx)))
        .collect();

    let constructor = make_constructor(class, ctx);
    let special_items = make_special_items(class_name);
    let trait_impls = make_trait_impls(class, ctx);
    let imports = make_imports(class, ctx, &ptrcall_methods, &varcall_methods);
    let class_doc = make_class_doc(class, ctx);

    quote! {
        #imports

        #class_doc
        #[repr(transparent)]
        pub struct #class_ty {
            object_ptr: sys::GDExtensionObjectPtr,
        }

        struct Methods {
            #( #bind_fields )*
        }

        static METHODS: ClassMethodTable<Methods> = ClassMethodTable::new();

        fn methods() -> &'static Methods {
            METHODS.get_or_init(|| Methods {
                #( #bind_inits )*
            })
        }

        impl #class_ty {
            pub(crate) const CLASS: ClassName = ClassName::from_static(#class_name);

            #constructor

            #( #method_fns )*
        }

        #special_items

        #trait_impls
    }
}

/// Whether a method survives curation and type support.
fn is_method_generated(class_name: &str, method: &ClassMethod, ctx: &Context) -> bool {
    if !special_cases::is_method_selected(class_name, &method.name) {
        return false;
    }

    // Virtuals have no method bind; varargs and statics need varcall paths not generated here.
    if method.is_virtual || method.is_vararg || method.is_static || method.hash.is_none() {
        return false;
    }

    let types_supported = method
        .arguments
        .iter()
        .flatten()
        .all(|arg| to_rust_type(&arg.type_, ctx).is_some())
        && method
            .return_value
            .as_ref()
            .map_or(true, |ret| to_rust_type(&ret.type_, ctx).is_some());

    types_supported
}

/// Whether a vararg method gets a variant-based call pair (`x` + `try_x`).
fn is_varcall_generated(class_name: &str, method: &ClassMethod, ctx: &Context) -> bool {
    if !special_cases::is_method_selected(class_name, &method.name) {
        return false;
    }

    if !method.is_vararg || method.is_virtual || method.is_static || method.hash.is_none() {
        return false;
    }

    // Declared arguments travel as variants; objects have no variant conversion here.
    let args_supported = method.arguments.iter().flatten().all(|arg| {
        matches!(
            to_rust_type(&arg.type_, ctx),
            Some(RustTy::BuiltinCopy(_) | RustTy::BuiltinByRef(_))
        )
    });

    let returns_variant = method
        .return_value
        .as_ref()
        .map_or(false, |ret| ret.type_ == "Variant");

    args_supported && returns_variant
}

fn make_method(class_name: &str, method: &ClassMethod, ctx: &Context) -> TokenStream {
    let fn_name = safe_snake_ident(&method.name);
    let bind_field = safe_snake_ident(&method.name);

    // The refcount trio delegates to raw helpers shared with the memory policy.
    if class_name == "RefCounted" {
        if let Some(tokens) = refcounted_delegating_method(method) {
            return tokens;
        }
    }

    let receiver = if method.is_const {
        quote! { &self }
    } else {
        quote! { &mut self }
    };

    let args: Vec<(Ident, RustTy)> = method
        .arguments
        .iter()
        .flatten()
        .map(|arg| {
            let ty = to_rust_type(&arg.type_, ctx).expect("checked in is_method_generated");
            (safe_snake_ident(&arg.name), ty)
        })
        .collect();

    let params = args.iter().map(|(name, ty)| {
        let ty_tokens = ty.param_tokens();
        quote! { , #name: #ty_tokens }
    });

    let arg_count = Literal::usize_unsuffixed(args.len());
    let frame_decl = if args.is_empty() {
        quote! { let frame = CallFrame::<#arg_count>::new(); }
    } else {
        quote! { let mut frame = CallFrame::<#arg_count>::new(); }
    };

    let frame_pushes = args.iter().map(|(name, ty)| match ty {
        // By-value params live in locals; by-ref params and objects are already references.
        RustTy::BuiltinCopy(_) => quote! { frame.arg(&#name); },
        RustTy::BuiltinByRef(_) | RustTy::EngineClass(_) => quote! { frame.arg(#name); },
    });

    let ret_ty = method
        .return_value
        .as_ref()
        .map(|ret| to_rust_type(&ret.type_, ctx).expect("checked in is_method_generated"));

    let (ret_decl, ret_sig, ret_take) = match &ret_ty {
        None => (quote! { let mut ret = NilRet; }, quote! {}, quote! {}),
        Some(RustTy::EngineClass(ident)) => (
            quote! { let mut ret = RetSlot::<*mut std::ffi::c_void>::zeroed(); },
            quote! { -> Option<Gd<#ident>> },
            quote! { Gd::try_from_obj_sys(ret.take()) },
        ),
        // The engine assigns into CoW return slots, unrefing whatever is there first;
        // zeroed bytes read as a valid empty String/StringName.
        Some(ty @ RustTy::BuiltinByRef(_)) => {
            let tokens = ty.return_tokens();
            (
                quote! { let mut ret = RetSlot::<#tokens>::zeroed(); },
                quote! { -> #tokens },
                quote! { ret.take() },
            )
        }
        Some(ty) => {
            let tokens = ty.return_tokens();
            (
                quote! { let mut ret = RetSlot::<#tokens>::new(); },
                quote! { -> #tokens },
                quote! { ret.take() },
            )
        }
    };

    quote! {
        pub fn #fn_name(#receiver #( #params )*) #ret_sig {
            #frame_decl
            #( #frame_pushes )*
            #ret_decl
            unsafe {
                interface_fn!(object_method_bind_ptrcall)(
                    methods().#bind_field,
                    self.object_ptr,
                    frame.args_ptr(),
                    ret.type_ptr(),
                );
                #ret_take
            }
        }
    }
}

fn make_varcall_method(class_name: &str, method: &ClassMethod, ctx: &Context) -> TokenStream {
    let fn_name = safe_snake_ident(&method.name);
    let try_name = ident(&format!("try_{}", method.name.to_snake_case()));
    let bind_field = safe_snake_ident(&method.name);
    let method_str = method.name.as_str();

    let receiver = if method.is_const {
        quote! { &self }
    } else {
        quote! { &mut self }
    };

    let args: Vec<(Ident, RustTy)> = method
        .arguments
        .iter()
        .flatten()
        .map(|arg| {
            let ty = to_rust_type(&arg.type_, ctx).expect("checked in is_varcall_generated");
            (safe_snake_ident(&arg.name), ty)
        })
        .collect();

    let params: Vec<TokenStream> = args
        .iter()
        .map(|(name, ty)| {
            let ty_tokens = ty.param_tokens();
            quote! { , #name: #ty_tokens }
        })
        .collect();

    let forward_args = args.iter().map(|(name, _)| quote! { #name, });

    let locals: Vec<Ident> = args
        .iter()
        .map(|(name, _)| ident(&format!("{name}_variant")))
        .collect();
    let local_decls = args.iter().zip(&locals).map(|((name, _), local)| {
        quote! { let #local = #name.to_variant(); }
    });
    let pushes = locals.iter().map(|local| quote! { arg_ptrs.push(#local.var_sys()); });
    let fixed_count = Literal::usize_unsuffixed(args.len());

    quote! {
        pub fn #fn_name(#receiver #( #params )*, varargs: &[Variant]) -> Variant {
            self.#try_name(#( #forward_args )* varargs)
                .unwrap_or_else(|err| panic!("{err}"))
        }

        pub fn #try_name(#receiver #( #params )*, varargs: &[Variant]) -> Result<Variant, CallError> {
            #( #local_decls )*
            let mut arg_ptrs = Vec::with_capacity(#fixed_count + varargs.len());
            #( #pushes )*
            arg_ptrs.extend(varargs.iter().map(Variant::var_sys));

            let mut err = sys::default_call_error();
            let ret = unsafe {
                Variant::from_var_init(|ret_ptr| {
                    interface_fn!(object_method_bind_call)(
                        methods().#bind_field,
                        self.object_ptr,
                        arg_ptrs.as_ptr(),
                        arg_ptrs.len() as sys::GDExtensionInt,
                        ret_ptr,
                        &mut err,
                    );
                })
            };

            if err.error == sys::GDEXTENSION_CALL_OK {
                Ok(ret)
            } else {
                Err(CallError::from_sys(&err, #class_name, #method_str, arg_ptrs.len()))
            }
        }
    }
}

fn refcounted_delegating_method(method: &ClassMethod) -> Option<TokenStream> {
    let raw = match method.name.as_str() {
        "init_ref" => ident("raw_init_ref"),
        "reference" => ident("raw_reference"),
        "unreference" => ident("raw_unreference"),
        _ => return None,
    };
    let fn_name = safe_snake_ident(&method.name);

    Some(quote! {
        pub fn #fn_name(&mut self) -> bool {
            unsafe { #raw(self.object_ptr) }
        }
    })
}

/// Extra items for classes the runtime itself depends on.
fn make_special_items(class_name: &str) -> TokenStream {
    if class_name != "RefCounted" {
        return quote! {};
    }

    // The memory policy must adjust refcounts on objects that are not (yet) wrapped in a Gd.
    quote! {
        #[doc = " # Safety"]
        #[doc = " `object_ptr` must be a live `RefCounted` object."]
        pub(crate) unsafe fn raw_init_ref(object_ptr: sys::GDExtensionObjectPtr) -> bool {
            ref_bool_call(methods().init_ref, object_ptr)
        }

        #[doc = " # Safety"]
        #[doc = " `object_ptr` must be a live `RefCounted` object."]
        pub(crate) unsafe fn raw_reference(object_ptr: sys::GDExtensionObjectPtr) -> bool {
            ref_bool_call(methods().reference, object_ptr)
        }

        #[doc = " Returns `true` if the last reference was released."]
        #[doc = ""]
        #[doc = " # Safety"]
        #[doc = " `object_ptr` must be a live `RefCounted` object."]
        pub(crate) unsafe fn raw_unreference(object_ptr: sys::GDExtensionObjectPtr) -> bool {
            ref_bool_call(methods().unreference, object_ptr)
        }

        unsafe fn ref_bool_call(
            method_bind: sys::GDExtensionMethodBindPtr,
            object_ptr: sys::GDExtensionObjectPtr,
        ) -> bool {
            let frame = CallFrame::<0>::new();
            let mut ret = RetSlot::<bool>::new();
            interface_fn!(object_method_bind_ptrcall)(
                method_bind,
                object_ptr,
                frame.args_ptr(),
                ret.type_ptr(),
            );
            ret.take()
        }
    }
}

fn make_constructor(class: &Class, ctx: &Context) -> TokenStream {
    let class_ty = class_ident(&class.name);

    if ctx.is_singleton(&class.name) {
        let error_msg = format!("singleton {} not registered", class.name);
        return quote! {
            pub fn singleton() -> Gd<Self> {
                let name = Self::CLASS.to_string_name();
                let object_ptr = unsafe { interface_fn!(global_get_singleton)(name.string_sys()) };
                assert!(!object_ptr.is_null(), #error_msg);

                // Singletons are engine-owned and manually managed; Gd never frees them.
                unsafe { Gd::from_obj_sys(object_ptr) }
            }
        };
    }

    if !class.is_instantiable {
        return quote! {};
    }

    if class.is_refcounted {
        quote! {
            pub fn new_gd() -> Gd<Self> {
                crate::classes::construct_object::<#class_ty>()
            }
        }
    } else {
        quote! {
            pub fn new_alloc() -> Gd<Self> {
                crate::classes::construct_object::<#class_ty>()
            }
        }
    }
}

fn make_trait_impls(class: &Class, ctx: &Context) -> TokenStream {
    let class_ty = class_ident(&class.name);

    let base_chain = ctx.base_chain(&class.name);
    let base_ty = match base_chain.first() {
        Some(base) => {
            let base = class_ident(base);
            quote! { #base }
        }
        None => quote! { () },
    };

    let mem_ty = if class.is_refcounted {
        quote! { mem::StaticRefCount }
    } else {
        quote! { mem::ManualMemory }
    };

    let inherits_impls = base_chain.iter().map(|base| {
        let base = class_ident(base);
        quote! { impl Inherits<#base> for #class_ty {} }
    });

    quote! {
        impl GodotClass for #class_ty {
            type Base = #base_ty;
            type Mem = #mem_ty;

            fn class_name() -> ClassName {
                Self::CLASS
            }
        }

        impl EngineClass for #class_ty {
            fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
                self.object_ptr
            }

            fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
                &self.object_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionTypePtr
            }
        }

        #( #inherits_impls )*
    }
}

fn make_class_doc(class: &Class, ctx: &Context) -> TokenStream {
    let first = format!(" Engine class `{}`.", class.name);

    let second = if ctx.is_singleton(&class.name) {
        " Singleton; access through [`singleton()`][Self::singleton]."
    } else if class.is_refcounted {
        " Reference-counted; the last [`Gd`][crate::obj::Gd] to drop destroys the object."
    } else {
        " Manually managed; see [`Gd::free()`][crate::obj::Gd::free]."
    };

    quote! {
        #[doc = #first]
        #[doc = ""]
        #[doc = #second]
    }
}

/// Import block, restricted to what the class body actually references.
fn make_imports(
    class: &Class,
    ctx: &Context,
    ptrcall_methods: &[&ClassMethod],
    varcall_methods: &[&ClassMethod],
) -> TokenStream {
    let mut builtins: BTreeSet<String> = BTreeSet::new();
    let mut engine_classes: BTreeSet<String> = BTreeSet::new();
    let mut needs_nil = false;
    let mut needs_ret = false;
    let mut needs_gd = false;

    let mut record = |ty: &RustTy| match ty {
        RustTy::BuiltinCopy(id) => {
            let name = id.to_string();
            // Scalars come from the prelude, not crate::builtin.
            if !matches!(name.as_str(), "bool" | "i64" | "f64") {
                builtins.insert(name);
            }
        }
        RustTy::BuiltinByRef(id) => {
            builtins.insert(id.to_string());
        }
        RustTy::EngineClass(id) => {
            engine_classes.insert(id.to_string());
            needs_gd = true;
        }
    };

    for method in ptrcall_methods {
        for arg in method.arguments.iter().flatten() {
            if let Some(ty) = to_rust_type(&arg.type_, ctx) {
                record(&ty);
            }
        }
        match &method.return_value {
            Some(ret) => {
                if let Some(ty) = to_rust_type(&ret.type_, ctx) {
                    record(&ty);
                }
                needs_ret = true;
            }
            None => needs_nil = true,
        }
    }

    for method in varcall_methods {
        for arg in method.arguments.iter().flatten() {
            if let Some(ty) = to_rust_type(&arg.type_, ctx) {
                record(&ty);
            }
        }
    }
    // Out of the loop; `record` still borrows `builtins` there.
    if !varcall_methods.is_empty() {
        builtins.insert("ToVariant".to_string());
        builtins.insert("Variant".to_string());
    }

    if class.name == "RefCounted" {
        // Raw helpers always need a return slot.
        needs_ret = true;
    }
    if class.is_instantiable || ctx.is_singleton(&class.name) {
        needs_gd = true;
    }

    let base_chain = ctx.base_chain(&class.name);
    for base in &base_chain {
        engine_classes.insert((*base).to_string());
    }
    engine_classes.remove(&class.name);

    let sys_items = {
        let mut items = vec![ident("interface_fn"), ident("CallFrame")];
        if needs_nil {
            items.push(ident("NilRet"));
        }
        if needs_ret {
            items.push(ident("RetSlot"));
        }
        items
    };

    let builtin_use = if builtins.is_empty() {
        quote! {}
    } else {
        let items = builtins.iter().map(|name| ident(name));
        quote! { use crate::builtin::{ #( #items ),* }; }
    };

    let class_items = engine_classes.iter().map(|name| ident(name));
    let class_use =
        quote! { use crate::classes::{load_method_bind, ClassMethodTable #(, #class_items)* }; };

    let obj_items = {
        let mut items = vec![ident("mem"), ident("EngineClass")];
        if needs_gd {
            items.push(ident("Gd"));
        }
        items.push(ident("GodotClass"));
        if !base_chain.is_empty() {
            items.push(ident("Inherits"));
        }
        items
    };

    let meta_use = if varcall_methods.is_empty() {
        quote! { use crate::meta::ClassName; }
    } else {
        quote! { use crate::meta::{CallError, ClassName}; }
    };

    quote! {
        use gdcall_sys as sys;
        use sys::{ #( #sys_items ),* };

        #builtin_use
        #class_use
        #meta_use
        use crate::obj::{ #( #obj_items ),* };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_parser::parse_extension_api;

    const MINI_API: &str = r#"{
        "header": {
            "version_major": 4, "version_minor": 2, "version_patch": 0,
            "version_status": "stable",
            "version_full_name": "Godot Engine v4.2.stable.official"
        },
        "builtin_class_sizes": [],
        "classes": [
            {
                "name": "Object",
                "is_refcounted": false,
                "is_instantiable": true,
                "inherits": null,
                "api_type": "core",
                "methods": [
                    {
                        "name": "get_class",
                        "is_const": true, "is_vararg": false, "is_static": false,
                        "is_virtual": false, "hash": 201670096,
                        "return_value": { "type": "String" }
                    },
                    {
                        "name": "get_instance_id",
                        "is_const": true, "is_vararg": false, "is_static": false,
                        "is_virtual": false, "hash": 3905245786,
                        "return_value": { "type": "int" }
                    },
                    {
                        "name": "call",
                        "is_const": false, "is_vararg": true, "is_static": false,
                        "is_virtual": false, "hash": 3400424181,
                        "return_value": { "type": "Variant" },
                        "arguments": [ { "name": "method", "type": "StringName" } ]
                    }
                ]
            },
            {
                "name": "Node",
                "is_refcounted": false,
                "is_instantiable": true,
                "inherits": "Object",
                "api_type": "core",
                "methods": [
                    {
                        "name": "get_parent",
                        "is_const": true, "is_vararg": false, "is_static": false,
                        "is_virtual": false, "hash": 3160264692,
                        "return_value": { "type": "Node" }
                    },
                    {
                        "name": "add_child",
                        "is_const": false, "is_vararg": false, "is_static": false,
                        "is_virtual": false, "hash": 3863233950,
                        "arguments": [
                            { "name": "node", "type": "Node" },
                            { "name": "force_readable_name", "type": "bool" },
                            { "name": "internal", "type": "int" }
                        ]
                    },
                    {
                        "name": "get_path",
                        "is_const": true, "is_vararg": false, "is_static": false,
                        "is_virtual": false, "hash": 4075236667,
                        "return_value": { "type": "NodePath" }
                    },
                    {
                        "name": "rpc",
                        "is_const": false, "is_vararg": true, "is_static": false,
                        "is_virtual": false, "hash": 4047867050
                    }
                ]
            }
        ],
        "global_enums": [],
        "singletons": []
    }"#;

    fn generate(class_name: &str) -> String {
        let api = parse_extension_api(MINI_API);
        let ctx = Context::build(&api);
        let class = api.classes.iter().find(|c| c.name == class_name).unwrap();
        make_class_module(class, &ctx).to_string()
    }

    #[test]
    fn generates_selected_methods_only() {
        let code = generate("Node");

        assert!(code.contains("pub fn get_parent"));
        assert!(code.contains("pub fn add_child"));
        // NodePath is unsupported, rpc is vararg, neither may appear.
        assert!(!code.contains("get_path"));
        assert!(!code.contains("fn rpc"));
    }

    #[test]
    fn object_returns_are_nullable() {
        let code = generate("Node");

        // proc-macro2 renders the closing `>>` either joint or spaced; pin only the prefix.
        assert!(code.contains("Option < Gd < Node >"));
        assert!(code.contains(":: zeroed ()"));
    }

    #[test]
    fn hierarchy_impls_walk_selected_bases() {
        let code = generate("Node");

        assert!(code.contains("impl Inherits < Object > for Node"));
        assert!(code.contains("type Base = Object"));
        assert!(code.contains("type Mem = mem :: ManualMemory"));
    }

    #[test]
    fn const_methods_take_shared_receiver() {
        let code = generate("Object");

        assert!(code.contains("pub fn get_instance_id (& self)"));
    }

    #[test]
    fn hierarchy_root_has_unit_base() {
        let code = generate("Object");

        assert!(code.contains("type Base = ()"));
        assert!(!code.contains("impl Inherits"));
    }

    #[test]
    fn method_binds_are_pinned_to_hashes() {
        let code = generate("Node");

        assert!(code.contains("load_method_bind (Node :: CLASS , \"add_child\" , 3863233950)"));
    }

    #[test]
    fn vararg_methods_get_a_varcall_pair() {
        let code = generate("Object");

        assert!(code.contains("pub fn call (& mut self , method : & StringName , varargs : & [Variant])"));
        assert!(code.contains("pub fn try_call"));
        assert!(code.contains("object_method_bind_call"));
        assert!(code.contains("Result < Variant , CallError >"));
        assert!(code.contains("load_method_bind (Object :: CLASS , \"call\" , 3400424181)"));
        // The reported count covers declared arguments plus varargs.
        assert!(code.contains("CallError :: from_sys (& err , \"Object\" , \"call\" , arg_ptrs . len ())"));
    }

    #[test]
    fn varcall_classes_import_variant_machinery() {
        let code = generate("Object");

        assert!(code.contains("use crate :: builtin :: { GString , StringName , ToVariant , Variant }"));
        assert!(code.contains("use crate :: meta :: { CallError , ClassName }"));
    }

    #[test]
    fn cow_string_returns_use_zeroed_slots() {
        let code = generate("Object");

        // The engine unrefs the previous slot contents before assigning the result.
        assert!(code.contains("RetSlot :: < GString > :: zeroed ()"));
        assert!(!code.contains("RetSlot :: < GString > :: new ()"));
    }

    #[test]
    fn module_names() {
        assert_eq!(module_name("Node2D"), "node2d");
        assert_eq!(module_name("CanvasItem"), "canvas_item");
        assert_eq!(module_name("RefCounted"), "ref_counted");
    }
}
