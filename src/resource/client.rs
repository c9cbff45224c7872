//! Resource Client
//!
//! One generic implementation of the list / get / create / patch / delete
//! operation set. Entity types describe themselves through [`Resource`] and
//! the capability traits; paths come from the registry.

use std::fmt;
use std::marker::PhantomData;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::fetcher::{fetch_all, fetch_page, PageScope, Paginated};
use super::registry::{get_resource, IdKind, ResourceDef};
use crate::connection::{ApiRequest, ApiRequestParameters, Connection, Decode};
use crate::error::{EcloudError, Result};

/// Identifier of a resource, validated before any request is sent
pub trait ResourceId: fmt::Display + Send + Sync {
    const KIND: IdKind;

    fn validate(&self) -> Result<()>;
}

impl ResourceId for str {
    const KIND: IdKind = IdKind::String;

    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(EcloudError::Validation("id must not be empty"));
        }
        Ok(())
    }
}

impl ResourceId for i64 {
    const KIND: IdKind = IdKind::Integer;

    fn validate(&self) -> Result<()> {
        if *self < 1 {
            return Err(EcloudError::Validation("id must be a positive integer"));
        }
        Ok(())
    }
}

/// Maps a 404 on an item endpoint to the resource's NotFound
fn not_found<'a, I>(
    key: &'static str,
    id: &'a I,
) -> impl FnOnce(StatusCode) -> Option<EcloudError> + 'a
where
    I: ResourceId + ?Sized,
{
    move |status| (status == StatusCode::NOT_FOUND).then(|| EcloudError::not_found(key, id))
}

/// An entity exposed by the API
pub trait Resource: DeserializeOwned + Send {
    /// Registry key, also used as the NotFound tag
    const KEY: &'static str;

    type Id: ResourceId + ?Sized;
}

pub trait Creatable: Resource {
    type Request: Serialize + Sync;
    type Created: Decode;
}

pub trait Patchable: Resource {
    type Request: Serialize + Sync;
    type Patched: Decode;
}

pub trait Deletable: Resource {
    type Deleted: Decode;
}

/// Operations on one resource kind
pub struct ResourceClient<'c, C, R> {
    connection: &'c C,
    def: &'static ResourceDef,
    _marker: PhantomData<fn() -> R>,
}

impl<C, R> fmt::Debug for ResourceClient<'_, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &self.def.display_name)
            .finish_non_exhaustive()
    }
}

impl<'c, C, R> ResourceClient<'c, C, R>
where
    C: Connection,
    R: Resource,
{
    pub fn new(connection: &'c C) -> Result<Self> {
        let def = get_resource(R::KEY)
            .ok_or_else(|| EcloudError::UnknownResource(R::KEY.to_string()))?;
        debug_assert_eq!(def.id_kind, <R::Id as ResourceId>::KIND, "{}", R::KEY);

        Ok(Self {
            connection,
            def,
            _marker: PhantomData,
        })
    }

    pub fn definition(&self) -> &'static ResourceDef {
        self.def
    }

    /// Every item of the collection, following all pages
    pub async fn list(&self, parameters: ApiRequestParameters) -> Result<Vec<R>> {
        let scope = PageScope::collection(self.def.collection_path());
        let scope = &scope;
        let connection = self.connection;

        fetch_all(parameters, |params| async move {
            fetch_page::<C, R>(connection, scope, &params).await
        })
        .await
    }

    /// A single page of the collection
    pub async fn list_paginated(
        &self,
        parameters: ApiRequestParameters,
    ) -> Result<Paginated<'c, C, R>> {
        let scope = PageScope::collection(self.def.collection_path());
        Paginated::fetch(self.connection, scope, parameters).await
    }

    pub async fn get(&self, id: &R::Id) -> Result<R> {
        id.validate()?;

        self.connection
            .send(ApiRequest::new(Method::GET, &self.def.item_path(&id)))
            .await?
            .handle(not_found(R::KEY, id))?
            .data()
    }

    pub async fn create(&self, request: &R::Request) -> Result<R::Created>
    where
        R: Creatable,
    {
        let body = serde_json::to_value(request)?;
        let response = self
            .connection
            .post(&self.def.collection_path(), Some(body))
            .await?
            .handle(|_| None)?;

        R::Created::decode(&response)
    }

    pub async fn patch(&self, id: &R::Id, request: &R::Request) -> Result<R::Patched>
    where
        R: Patchable,
    {
        id.validate()?;

        let body = serde_json::to_value(request)?;
        let response = self
            .connection
            .patch(&self.def.item_path(&id), Some(body))
            .await?
            .handle(not_found(R::KEY, id))?;

        R::Patched::decode(&response)
    }

    pub async fn delete(&self, id: &R::Id) -> Result<R::Deleted>
    where
        R: Deletable,
    {
        id.validate()?;

        let response = self
            .connection
            .delete(&self.def.item_path(&id))
            .await?
            .handle(not_found(R::KEY, id))?;

        R::Deleted::decode(&response)
    }

    fn child_scope<S: Resource>(&self, id: &R::Id) -> Result<PageScope> {
        id.validate()?;

        let sub = self
            .def
            .sub_resource(S::KEY)
            .ok_or_else(|| EcloudError::UnknownResource(format!("{}/{}", R::KEY, S::KEY)))?;

        Ok(PageScope::nested(
            format!("{}/{}", self.def.item_path(&id), sub.path),
            R::KEY,
            id.to_string(),
        ))
    }

    /// Every child of type `S` under the resource `id`, following all pages
    pub async fn list_children<S: Resource>(
        &self,
        id: &R::Id,
        parameters: ApiRequestParameters,
    ) -> Result<Vec<S>> {
        let scope = self.child_scope::<S>(id)?;
        let scope = &scope;
        let connection = self.connection;

        fetch_all(parameters, |params| async move {
            fetch_page::<C, S>(connection, scope, &params).await
        })
        .await
    }

    pub async fn list_children_paginated<S: Resource>(
        &self,
        id: &R::Id,
        parameters: ApiRequestParameters,
    ) -> Result<Paginated<'c, C, S>> {
        let scope = self.child_scope::<S>(id)?;
        Paginated::fetch(self.connection, scope, parameters).await
    }

    /// Run a registered action (power, lock, attach, ...) against `id`
    pub async fn action<B, O>(&self, id: &R::Id, action: &str, body: Option<&B>) -> Result<O>
    where
        B: Serialize + Sync + ?Sized,
        O: Decode,
    {
        id.validate()?;

        let def = self
            .def
            .action(action)
            .ok_or_else(|| EcloudError::UnsupportedAction {
                resource: R::KEY,
                action: action.to_string(),
            })?;

        let body = body.map(serde_json::to_value).transpose()?;
        let request = ApiRequest::new(
            def.method.as_method(),
            &format!("{}/{}", self.def.item_path(&id), def.path),
        )
        .with_body(body);

        tracing::info!("{} {} on {}", R::KEY, def.key, id);

        let response = self
            .connection
            .send(request)
            .await?
            .handle(not_found(R::KEY, id))?;

        O::decode(&response)
    }
}
