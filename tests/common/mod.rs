use symbol::lang::Error;
use symbol::mach::Program;

pub fn exec(program: &mut Program) -> Result<String, Error> {
    let mut s = String::new();
    program.run(&mut s)?;
    Ok(s)
}

pub fn compile_and_exec(source: &str) -> Result<String, Error> {
    let mut program = Program::new();
    program.write(source);
    program.compile()?;
    exec(&mut program)
}
