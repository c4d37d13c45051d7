use crate::{assembler::InjectionHandle, errors::InjectError, types::DependencyInfo};

pub mod arc;

/// Something a provider can pull out of the graph under construction
pub trait Resolver {
    #[allow(async_fn_in_trait)]
    async fn resolve(handle: &mut InjectionHandle) -> Result<Self, InjectError>
    where
        Self: Sized;

    /// What resolving this type requires from the graph
    fn dependency_info() -> DependencyInfo;
}
