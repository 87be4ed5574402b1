//! React function components (TSX)

use crate::parser::{SvgDocument, SVG_NAMESPACE};

use super::bindings::{bind_attributes, Bindings};
use super::dimension_literal;

pub(super) fn render(doc: &SvgDocument, name: &str, full_featured: bool) -> String {
    if full_featured {
        render_full(doc, name)
    } else {
        render_minimal(doc, name)
    }
}

fn render_full(doc: &SvgDocument, name: &str) -> String {
    let width = dimension_literal(&doc.width);
    let height = dimension_literal(&doc.height);
    let view_box = &doc.view_box;
    let inner = bind_attributes(&doc.inner_markup, &Bindings::REACT);

    format!(
        r#"import React from 'react';

interface {name}Props {{
  className?: string;
  size?: number | string;
  width?: number | string;
  height?: number | string;
  color?: string;
  fill?: string;
  stroke?: string;
  strokeWidth?: number | string;
  onClick?: () => void;
  style?: React.CSSProperties;
}}

export const {name}: React.FC<{name}Props> = ({{
  className = "",
  size,
  width = size || {width},
  height = size || {height},
  color,
  fill = color || "currentColor",
  stroke = "currentColor",
  strokeWidth = 1,
  onClick,
  style,
  ...props
}}) => {{
  return (
    <svg
      width={{width}}
      height={{height}}
      viewBox="{view_box}"
      fill="none"
      xmlns="{SVG_NAMESPACE}"
      className={{`${{className}}`}}
      onClick={{onClick}}
      style={{style}}
      {{...props}}
    >
      {inner}
    </svg>
  );
}};

export default {name};"#
    )
}

fn render_minimal(doc: &SvgDocument, name: &str) -> String {
    let width = dimension_literal(&doc.width);
    let height = dimension_literal(&doc.height);
    let view_box = &doc.view_box;
    let inner = &doc.inner_markup;

    format!(
        r#"import React from 'react';

export const {name} = ({{ className = "", size, width = size || {width}, height = size || {height}, ...props }}) => {{
  return (
    <svg
      width={{width}}
      height={{height}}
      viewBox="{view_box}"
      fill="none"
      xmlns="{SVG_NAMESPACE}"
      className={{`${{className}}`}}
      {{...props}}
    >
      {inner}
    </svg>
  );
}};

export default {name};"#
    )
}
