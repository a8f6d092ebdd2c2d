//! The sample company document shown by the binary.

use tracing::instrument;

use crate::domain::{DomainResult, Node};

/// Builds the company document bottom-up: leaves first, containers wrapping them.
#[instrument(level = "debug")]
pub fn company_document() -> DomainResult<Node> {
    let mut document = Node::document("Документ Компании");

    let mut intro = Node::section("Введение");
    intro.add(Node::paragraph("Это параграф введения."))?;

    let mut main = Node::section("Основной Раздел");
    main.add(Node::paragraph("Это первый параграф основного раздела."))?;

    let mut subsection = Node::section("Подраздел");
    subsection.add(Node::paragraph("Это параграф в подразделе."))?;

    main.add(subsection)?;

    document.add(intro)?;
    document.add(main)?;

    Ok(document)
}
