mod resolve_query;
mod resolve_static;

pub use resolve_query::ResolveQueryUseCase;
pub use resolve_static::StaticResolveUseCase;
