//! Vue single-file components using `<script setup>`

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

// Size and color fallbacks live in computed refs since withDefaults cannot
// express defaults that depend on other props.
fn render_full(doc: &SvgDocument) -> String {
    let width = dimension_literal(&doc.width);
    let height = dimension_literal(&doc.height);
    let view_box = &doc.view_box;
    let inner = bind_attributes(&doc.inner_markup, &Bindings::VUE);

    format!(
        r#"<template>
  <svg
    :width="resolvedWidth"
    :height="resolvedHeight"
    viewBox="{view_box}"
    fill="none"
    xmlns="{SVG_NAMESPACE}"
    :class="className"
    :style="style"
    @click="onClick"
    v-bind="$attrs"
  >
    {inner}
  </svg>
</template>

<script setup lang="ts">
import {{ computed }} from 'vue';

interface Props {{
  className?: string;
  size?: number | string;
  width?: number | string;
  height?: number | string;
  color?: string;
  fill?: string;
  stroke?: string;
  strokeWidth?: number | string;
  onClick?: () => void;
  style?: Record<string, any>;
}}

const props = withDefaults(defineProps<Props>(), {{
  className: "",
  stroke: "currentColor",
  strokeWidth: 1,
}});

const resolvedWidth = computed(() => props.width ?? (props.size || {width}));
const resolvedHeight = computed(() => props.height ?? (props.size || {height}));
const resolvedFill = computed(() => props.fill ?? (props.color || "currentColor"));
</script>"#
    )
}

fn render_minimal(doc: &SvgDocument) -> String {
    let width = dimension_literal(&doc.width);
    let height = dimension_literal(&doc.height);
    let view_box = &doc.view_box;
    let inner = &doc.inner_markup;

    format!(
        r#"<template>
  <svg
    :width="resolvedWidth"
    :height="resolvedHeight"
    viewBox="{view_box}"
    fill="none"
    xmlns="{SVG_NAMESPACE}"
    :class="className"
    v-bind="$attrs"
  >
    {inner}
  </svg>
</template>

<script setup>
import {{ computed }} from 'vue';

const props = defineProps({{
  className: {{ type: String, default: "" }},
  size: [Number, String],
  width: [Number, String],
  height: [Number, String],
}});

const resolvedWidth = computed(() => props.width ?? (props.size || {width}));
const resolvedHeight = computed(() => props.height ?? (props.size || {height}));
</script>"#
    )
}
