//! Svelte components with exported props

use crate::parser::{SvgDocument, SVG_NAMESPACE};

use super::bindings::{bind_attributes, Bindings};
use super::dimension_literal;

pub(super) fn render(doc: &SvgDocument, full_featured: bool) -> String {
    if full_featured {
        render_full(doc)
    } else {
        render_minimal(doc)
    }
}

fn render_full(doc: &SvgDocument) -> String {
    let width = dimension_literal(&doc.width);
    let height = dimension_literal(&doc.height);
    let view_box = &doc.view_box;
    let inner = bind_attributes(&doc.inner_markup, &Bindings::SVELTE);

    format!(
        r#"<script lang="ts">
  export let className: string = "";
  export let size: number | string | undefined = undefined;
  export let width: number | string = size || {width};
  export let height: number | string = size || {height};
  export let color: string | undefined = undefined;
  export let fill: string = color || "currentColor";
  export let stroke: string = "currentColor";
  export let strokeWidth: number | string = 1;
  export let onClick: (() => void) | undefined = undefined;
  export let style: Record<string, any> | undefined = undefined;
</script>

<svg
  {{width}}
  {{height}}
  viewBox="{view_box}"
  fill="none"
  xmlns="{SVG_NAMESPACE}"
  class={{className}}
  style={{style}}
  on:click={{onClick}}
  {{...$$restProps}}
>
  {inner}
</svg>"#
    )
}

fn render_minimal(doc: &SvgDocument) -> String {
    let width = dimension_literal(&doc.width);
    let height = dimension_literal(&doc.height);
    let view_box = &doc.view_box;
    let inner = &doc.inner_markup;

    format!(
        r#"<script>
  export let className = "";
  export let size = undefined;
  export let width = size || {width};
  export let height = size || {height};
</script>

<svg
  {{width}}
  {{height}}
  viewBox="{view_box}"
  fill="none"
  xmlns="{SVG_NAMESPACE}"
  class={{className}}
  {{...$$restProps}}
>
  {inner}
</svg>"#
    )
}
