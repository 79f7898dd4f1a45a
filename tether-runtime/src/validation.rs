//! Guest module validation.
//!
//! Checks a compiled module against the wire contract before the runtime
//! will instantiate it:
//!
//! 1. Required exports present with exact core signatures
//! 2. Every import is one of the two known capabilities, exact signature
//! 3. No WASI or other foreign imports
//! 4. `memory` export present

use tether_abi::names;
use wasmtime::{ExternType, FuncType, Module, ValType};

use crate::error::RuntimeError;

/// Required function exports: (name, params, results).
const REQUIRED_EXPORTS: &[(&str, &[ValType], &[ValType])] = &[
    (names::EXPORT_HTTP_GET, &[ValType::I32, ValType::I32], &[ValType::I64]),
    (
        names::EXPORT_HTTP_GET_STRING,
        &[ValType::I32, ValType::I32],
        &[ValType::I64],
    ),
    (names::EXPORT_ALLOCATE, &[ValType::I32], &[ValType::I32]),
    (names::EXPORT_DEALLOCATE, &[ValType::I32, ValType::I32], &[]),
];

/// Known imports: (module, name, params, results).
const KNOWN_IMPORTS: &[(&str, &str, &[ValType], &[ValType])] = &[
    (
        names::IMPORT_MODULE_TYPE_CONVERSION,
        names::IMPORT_BYTES_TO_STRING,
        &[ValType::I32, ValType::I32],
        &[ValType::I64],
    ),
    (
        names::IMPORT_MODULE_HTTP,
        names::IMPORT_GET,
        &[ValType::I32, ValType::I32],
        &[ValType::I64],
    ),
];

/// Validate that a guest module meets the wire contract.
pub fn validate_module(module: &Module) -> Result<(), RuntimeError> {
    validate_exports(module)?;
    validate_imports(module)?;
    Ok(())
}

// ValType deliberately has no PartialEq in wasmtime; compare via ValType::eq.
fn signature_matches(func: &FuncType, params: &[ValType], results: &[ValType]) -> bool {
    func.params().len() == params.len()
        && func.params().zip(params).all(|(a, b)| ValType::eq(&a, b))
        && func.results().len() == results.len()
        && func.results().zip(results).all(|(a, b)| ValType::eq(&a, b))
}

fn signature(params: &[ValType], results: &[ValType]) -> String {
    format!("{params:?} -> {results:?}")
}

fn validate_exports(module: &Module) -> Result<(), RuntimeError> {
    let has_memory = module
        .exports()
        .any(|e| e.name() == names::EXPORT_MEMORY && matches!(e.ty(), ExternType::Memory(_)));
    if !has_memory {
        return Err(RuntimeError::Validation(format!(
            "module must export '{}'",
            names::EXPORT_MEMORY
        )));
    }

    for &(name, params, results) in REQUIRED_EXPORTS {
        let export = module.exports().find(|e| e.name() == name).ok_or_else(|| {
            RuntimeError::Validation(format!("missing required export: {name}"))
        })?;

        let func = match export.ty() {
            ExternType::Func(func) => func,
            _ => {
                return Err(RuntimeError::Validation(format!(
                    "export '{name}' must be a function"
                )));
            }
        };

        if !signature_matches(&func, params, results) {
            return Err(RuntimeError::Validation(format!(
                "export '{name}' has wrong signature: expected {}",
                signature(params, results)
            )));
        }
    }

    Ok(())
}

fn validate_imports(module: &Module) -> Result<(), RuntimeError> {
    for import in module.imports() {
        let known = KNOWN_IMPORTS
            .iter()
            .find(|&&(m, n, _, _)| m == import.module() && n == import.name());

        let Some(&(_, _, params, results)) = known else {
            return Err(RuntimeError::Validation(format!(
                "unknown import: {}::{}",
                import.module(),
                import.name()
            )));
        };

        let func = match import.ty() {
            ExternType::Func(func) => func,
            _ => {
                return Err(RuntimeError::Validation(format!(
                    "import {}::{} must be a function",
                    import.module(),
                    import.name()
                )));
            }
        };

        if !signature_matches(&func, params, results) {
            return Err(RuntimeError::Validation(format!(
                "import {}::{} has wrong signature: expected {}",
                import.module(),
                import.name(),
                signature(params, results)
            )));
        }
    }

    Ok(())
}
