mod arbitrary;
mod property_balanced;
