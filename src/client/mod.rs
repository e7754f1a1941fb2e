//! Typed client for the library API, used to drive the HTTP surface in tests.

use cynic::http::ReqwestExt;
use cynic::serde;
use reqwest::Url;

pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Sends a query or mutation operation and decodes the response.
    pub async fn run<ResponseData, Vars>(
        &self,
        op: cynic::Operation<ResponseData, Vars>,
    ) -> cynic::GraphQlResponse<ResponseData>
    where
        Vars: serde::Serialize,
        ResponseData: serde::de::DeserializeOwned + 'static,
    {
        self.client
            .post(self.url.clone())
            .run_graphql(op)
            .await
            .unwrap()
    }
}

#[cynic::schema("library")]
mod schema {}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query")]
pub struct Library {
    pub authors: Option<Vec<Option<Author>>>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub books: Option<Vec<Option<AuthoredBook>>>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Book")]
pub struct AuthoredBook {
    pub id: i32,
    pub author: Option<AuthorId>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Author")]
pub struct AuthorId {
    pub id: i32,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query")]
pub struct Shelf {
    pub books: Option<Vec<Option<ShelvedBook>>>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Book")]
pub struct ShelvedBook {
    pub id: i32,
    pub name: String,
    #[cynic(rename = "author_id")]
    pub author_id: i32,
    pub author: Option<AuthorId>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct BookLookupVariables {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "BookLookupVariables")]
pub struct BookLookup {
    #[arguments(id: $id, name: $name)]
    pub book: Option<Book>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub date: String,
    #[cynic(rename = "author_id")]
    pub author_id: i32,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddAuthorVariables {
    pub name: Option<String>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddAuthorVariables")]
pub struct AddAuthor {
    #[arguments(name: $name)]
    pub add_author: Option<NewAuthor>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Author")]
pub struct NewAuthor {
    pub id: i32,
    pub name: String,
}
