use std::{any::type_name, sync::Arc};

use crate::{
    assembler::InjectionHandle,
    errors::{InjectError, LookupError},
    resolver::Resolver,
    types::{DependencyInfo, Injectable, TypeKey},
};

/// Shared instance of a bound type
///
/// Every resolve of the same type yields the same allocation.
impl<T: Injectable> Resolver for Arc<T> {
    async fn resolve(handle: &mut InjectionHandle) -> Result<Self, InjectError> {
        let resolved = handle.require(TypeKey::of::<T>()).await?;
        let downcasted = resolved
            .downcast::<T>()
            .map_err(|actual_type| LookupError::DowncastFailed {
                required_type: type_name::<T>(),
                actual_type,
            })?;

        Ok(downcasted)
    }

    fn dependency_info() -> DependencyInfo {
        DependencyInfo::of::<T>()
    }
}
