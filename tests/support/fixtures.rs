//! HTML fixtures shaped like the animal names page and its articles.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LIST_PATH: &str = "/wiki/List_of_animal_names";

/// One row of the animal table: name cell markup and adjective cell markup.
pub struct Row<'a> {
    pub name_cell: &'a str,
    pub adjective_cell: &'a str,
}

pub fn row<'a>(name_cell: &'a str, adjective_cell: &'a str) -> Row<'a> {
    Row {
        name_cell,
        adjective_cell,
    }
}

/// Renders a page whose third table is the animal table.
pub fn list_page(rows: &[Row<'_>]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>young</td><td>female</td><td>male</td><td>group</td><td>{}</td></tr>\n",
                row.name_cell, row.adjective_cell
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html><html><body>\n\
         <table id=\"toc\"><tr><td>Contents</td></tr></table>\n\
         <table class=\"notice\"><tr><td>Terms</td></tr></table>\n\
         <table class=\"wikitable sortable\"><tbody>\n\
         <tr><th>Animal</th><th>Young</th><th>Female</th><th>Male</th><th>Collective noun</th><th>Collateral adjective</th></tr>\n\
         {body}\
         </tbody></table>\n\
         </body></html>"
    )
}

/// Renders an article whose info box shows `image_src`.
pub fn article_page(image_src: &str) -> String {
    format!(
        "<html><body><p>Intro</p>\
         <table class=\"infobox biota\"><tbody>\
         <tr><th>Animal</th></tr>\
         <tr><td><a href=\"/wiki/File:x\"><img src=\"{image_src}\" width=\"250\"></a></td></tr>\
         </tbody></table></body></html>"
    )
}

pub async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_image(server: &MockServer, image_path: &str, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(bytes.to_vec())
                .insert_header("content-type", "image/png"),
        )
        .mount(server)
        .await;
}
